use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use algos::{BM, KMP, RK, RkParams, StringSearch, validate_input};
use clap::Parser;
use corpus::Corpus;

#[derive(Debug, Clone, clap::ValueEnum)]
enum Algorithm {
    Kmp,
    Bm,
    Rk,
}

/// Example:
/// cargo run --release -- -t data/article_1.txt -t data/article_2.txt --pattern "Distance" -a kmp --measure-time
/// cargo run --release -- -t data/article_1.txt --pattern "suppressed" -a rk --rk-modulus 1000000007
#[derive(Debug, clap::Parser)]
#[command(
    name = "string-search",
    about = "Run one exact substring search algorithm on one pattern and one or more texts"
)]
struct Cli {
    #[arg(short, long, value_enum)]
    algo: Algorithm,

    #[arg(short = 't', long = "text", value_name = "TEXT", required = true)]
    texts: Vec<PathBuf>,

    #[arg(
        long,
        conflicts_with = "pattern_file",
        required_unless_present = "pattern_file"
    )]
    pattern: Option<String>,

    #[arg(
        long = "pattern-file",
        value_name = "PATTERN_FILE",
        conflicts_with = "pattern",
        required_unless_present = "pattern"
    )]
    pattern_file: Option<PathBuf>,

    /// Multiplier for the Rabin-Karp polynomial hash (only used with --algo rk)
    #[arg(long = "rk-base", default_value_t = 256)]
    rk_base: u64,

    /// Reduction modulus for the Rabin-Karp polynomial hash (only used with --algo rk)
    #[arg(long = "rk-modulus", default_value_t = 101)]
    rk_modulus: u64,

    /// Optional output file; if omitted, results are written to stdout
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Measure and print execution time for the search algorithm
    #[arg(long)]
    measure_time: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let pattern = load_pattern(&cli)?;
    if pattern.is_empty() {
        return Err("Pattern must not be empty".into());
    }

    let mut out: Box<dyn Write> = match cli.output {
        Some(ref path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    writeln!(
        out,
        "# algorithm={:?}, pattern-length={}",
        cli.algo,
        pattern.len()
    )?;

    for text_path in &cli.texts {
        let corpus = Corpus::load(text_path)?;

        validate_input(corpus.text.as_bytes(), pattern.as_bytes())?;

        let (result, duration) = run_algorithm(&cli, &corpus.text, &pattern);

        writeln!(out, "text={:?}", text_path)?;

        if let Some(d) = duration {
            writeln!(out, "execution_time: {}ns", d.as_nanos())?;
        }

        match result {
            Some(offset) => writeln!(out, "match: {}", offset)?,
            None => writeln!(out, "match: absent")?,
        }
        writeln!(out)?;
    }

    Ok(())
}

fn load_pattern(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(ref pat) = cli.pattern {
        Ok(pat.clone())
    } else if let Some(ref path) = cli.pattern_file {
        Ok(Corpus::load(path)?.text)
    } else {
        Err("Either --pattern or --pattern-file must be provided".into())
    }
}

fn run_algorithm(cli: &Cli, text: &str, pattern: &str) -> (Option<usize>, Option<Duration>) {
    let start = if cli.measure_time {
        Some(Instant::now())
    } else {
        None
    };

    let result = match cli.algo {
        Algorithm::Kmp => KMP::find((), text, pattern),
        Algorithm::Bm => BM::find((), text, pattern),
        Algorithm::Rk => {
            let params = RkParams::new(cli.rk_base, cli.rk_modulus);
            RK::find(RK::build(params), text, pattern)
        }
    };

    let duration = start.map(|s| s.elapsed());

    (result, duration)
}
