use algos::{RkParams, bm_find, kmp_find, rk_find, rk_find_with};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// First-match offsets must agree across all three algorithms and the
/// standard-library baseline.
fn assert_all_agree(text: &str, pattern: &str) {
    let expected = text.find(pattern);
    let t = text.as_bytes();
    let p = pattern.as_bytes();

    assert_eq!(kmp_find(t, p), expected, "kmp on {:?} / {:?}", text, pattern);
    assert_eq!(bm_find(t, p), expected, "bm on {:?} / {:?}", text, pattern);
    assert_eq!(rk_find(t, p), expected, "rk on {:?} / {:?}", text, pattern);
}

#[test]
fn fixed_scenarios_agree() {
    assert_all_agree("ABABDABACDABABCABAB", "ABABCABAB");
    assert_all_agree("HERE IS A SIMPLE EXAMPLE", "EXAMPLE");
    assert_all_agree("GEEKS FOR GEEKS", "FOR");
    assert_all_agree("AAAAAA", "AAA");
    assert_all_agree("ABCDEF", "XYZ");
}

#[test]
fn boundary_scenarios_agree() {
    // pattern == text
    assert_all_agree("EXAMPLE", "EXAMPLE");
    // match only at the last valid offset
    assert_all_agree("bbbbbbba", "a");
    assert_all_agree("xyxyxyxyzz", "zz");
    // single-byte text
    assert_all_agree("a", "a");
    assert_all_agree("a", "b");
}

#[test]
fn randomized_inputs_agree() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let alphabet = [b'a', b'b', b'c'];

    for _ in 0..500 {
        let text_len = rng.gen_range(0..200);
        let text: String = (0..text_len)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
            .collect();

        let pat_len = rng.gen_range(1..8);
        let pattern: String = (0..pat_len)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
            .collect();

        assert_all_agree(&text, &pattern);
    }
}

#[test]
fn randomized_inputs_agree_with_tiny_modulus() {
    // Force constant Rabin-Karp collisions; literal confirmation must keep
    // the result identical to the baseline.
    let params = RkParams::new(256, 3);
    let mut rng = StdRng::seed_from_u64(42);
    let alphabet = [b'a', b'b'];

    for _ in 0..200 {
        let text_len = rng.gen_range(1..100);
        let text: String = (0..text_len)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
            .collect();

        let pat_len = rng.gen_range(1..5);
        let pattern: String = (0..pat_len)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
            .collect();

        assert_eq!(
            rk_find_with(params, text.as_bytes(), pattern.as_bytes()),
            text.find(&pattern),
            "rk with modulus 3 on {:?} / {:?}",
            text,
            pattern
        );
    }
}
