use std::path::PathBuf;
use std::time::Instant;

use algos::{RkParams, bm_find, kmp_find, rk_find_with, validate_input};
use clap::Parser;
use corpus::Corpus;

const KMP_NAME: &str = "Knuth-Morris-Pratt";
const BM_NAME: &str = "Boyer-Moore";
const RK_NAME: &str = "Rabin-Karp";

/// Example:
/// cargo run --release -- -t data/article_1.txt -t data/article_2.txt -p "Distance" -p "suppressed"
#[derive(Debug, clap::Parser)]
#[command(
    name = "search-bench",
    about = "Compare KMP, Boyer-Moore and Rabin-Karp timings on text corpora"
)]
struct Cli {
    #[arg(short = 't', long = "text", value_name = "TEXT", required = true)]
    texts: Vec<PathBuf>,

    #[arg(short = 'p', long = "pattern", value_name = "PATTERN", required = true)]
    patterns: Vec<String>,

    /// Number of back-to-back repetitions per measured search
    #[arg(long, default_value_t = 10)]
    trials: u32,

    /// Multiplier for the Rabin-Karp polynomial hash
    #[arg(long = "rk-base", default_value_t = 256)]
    rk_base: u64,

    /// Reduction modulus for the Rabin-Karp polynomial hash
    #[arg(long = "rk-modulus", default_value_t = 101)]
    rk_modulus: u64,
}

#[derive(Debug)]
struct Measurement {
    algo: &'static str,
    result: Option<usize>,
    corpus_chars: usize,
    millis: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.trials == 0 {
        return Err("trials must be at least 1".into());
    }

    let rk_params = RkParams::new(cli.rk_base, cli.rk_modulus);
    let corpora = corpus::load_all(&cli.texts)?;

    for corpus in &corpora {
        log::info!("benchmarking corpus {} ({} chars)", corpus.name, corpus.len());

        for pattern in &cli.patterns {
            validate_input(corpus.text.as_bytes(), pattern.as_bytes())?;

            let measurements = run_grid(corpus, pattern, cli.trials, rk_params);
            check_agreement(&measurements, corpus, pattern)?;

            for m in &measurements {
                println!("{}", report_line(m));
            }
        }
    }

    Ok(())
}

/// Run all three matchers on the same (corpus, pattern) pair, holding the
/// input and the repetition count constant across algorithms.
fn run_grid(corpus: &Corpus, pattern: &str, trials: u32, rk_params: RkParams) -> Vec<Measurement> {
    let text = corpus.text.as_bytes();
    let pat = pattern.as_bytes();

    vec![
        measure(KMP_NAME, text, pat, trials, kmp_find),
        measure(BM_NAME, text, pat, trials, bm_find),
        measure(RK_NAME, text, pat, trials, |t, p| {
            rk_find_with(rk_params, t, p)
        }),
    ]
}

fn measure<F>(algo: &'static str, text: &[u8], pattern: &[u8], trials: u32, find: F) -> Measurement
where
    F: Fn(&[u8], &[u8]) -> Option<usize>,
{
    // One untimed run fixes the result and the presence flag.
    let result = find(text, pattern);

    let start = Instant::now();
    let mut checksum = 0usize;
    for _ in 0..trials {
        checksum = checksum.wrapping_add(find(text, pattern).map_or(0, |offset| offset + 1));
    }
    let elapsed = start.elapsed();
    log::debug!("{}: checksum {} over {} trials", algo, checksum, trials);

    Measurement {
        algo,
        result,
        corpus_chars: text.len(),
        millis: (elapsed.as_secs_f64() * 1000.0) as u64,
    }
}

fn check_agreement(
    measurements: &[Measurement],
    corpus: &Corpus,
    pattern: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let first = measurements[0].result;
    for m in &measurements[1..] {
        if m.result != first {
            return Err(format!(
                "algorithms disagree on pattern {:?} in corpus {}: {} found {:?}, {} found {:?}",
                pattern, corpus.name, measurements[0].algo, first, m.algo, m.result
            )
            .into());
        }
    }
    Ok(())
}

fn report_line(m: &Measurement) -> String {
    let presence = if m.result.is_some() {
        "present"
    } else {
        "absent"
    };
    format!(
        "{} ({}) search for '{}' chars takes '{}' ms",
        m.algo, presence, m.corpus_chars, m.millis
    )
}
