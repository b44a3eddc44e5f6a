use crate::StringSearch;

pub struct RK;

impl StringSearch for RK {
    type Config = RkParams;
    type State = RkParams;

    fn build(config: Self::Config) -> Self::State {
        config
    }

    fn find_bytes(state: Self::State, text: &[u8], pattern: &[u8]) -> Option<usize> {
        rk_find_with(state, text, pattern)
    }
}

/// Polynomial hash parameters for Rabin-Karp.
///
/// A small modulus (the default 101) keeps the arithmetic cheap but produces
/// more spurious hits; a larger prime trades verification work for hashing
/// work. The modulus must stay below 2^63 so the 128-bit intermediate
/// products cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RkParams {
    pub base: u64,
    pub modulus: u64,
}

impl RkParams {
    pub fn new(base: u64, modulus: u64) -> Self {
        assert!(base > 1, "base must be > 1");
        assert!(modulus > 1, "modulus must be > 1");
        assert!(modulus < 1 << 63, "modulus must be < 2^63");
        Self { base, modulus }
    }
}

impl Default for RkParams {
    fn default() -> Self {
        Self {
            base: 256,
            modulus: 101,
        }
    }
}

/// Pattern-derived rolling-hash state: the pattern's hash and the weight of
/// the window's leading byte, `base^(len-1) mod modulus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingHash {
    pub params: RkParams,
    pub pattern_hash: u64,
    pub lead_power: u64,
}

impl RollingHash {
    pub fn prepare(pattern: &[u8], params: RkParams) -> Self {
        let lead_power = if pattern.is_empty() {
            1
        } else {
            pow_mod(params.base, (pattern.len() - 1) as u64, params.modulus)
        };

        Self {
            params,
            pattern_hash: hash_bytes(pattern, params),
            lead_power,
        }
    }
}

pub fn rk_find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    rk_find_with(RkParams::default(), text, pattern)
}

/// Rabin-Karp: compare window hashes, confirm every hash hit with a literal
/// byte comparison before reporting a match. A hash hit that fails the
/// literal check is an expected event and the scan just continues.
pub fn rk_find_with(params: RkParams, text: &[u8], pattern: &[u8]) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return Some(0);
    }
    if m > n {
        return None;
    }

    let prepared = RollingHash::prepare(pattern, params);
    let RkParams { base, modulus } = params;

    let mut window_hash = hash_bytes(&text[..m], params);

    let mut i = 0;
    loop {
        if window_hash == prepared.pattern_hash {
            if &text[i..i + m] == pattern {
                return Some(i);
            }
            log::trace!("spurious hash hit at offset {}", i);
        }

        if i + m == n {
            return None;
        }

        // Roll: drop text[i], shift the window left by one, append text[i+m].
        let outgoing = mul_mod(text[i] as u64, prepared.lead_power, modulus);
        let without_lead = sub_mod(window_hash, outgoing, modulus);
        window_hash = add_mod(
            mul_mod(without_lead, base, modulus),
            text[i + m] as u64,
            modulus,
        );
        debug_assert!(window_hash < modulus);

        i += 1;
    }
}

/// Polynomial hash of `bytes` via Horner's rule, reduced at every step.
fn hash_bytes(bytes: &[u8], params: RkParams) -> u64 {
    let mut hash = 0;
    for &b in bytes {
        hash = add_mod(mul_mod(hash, params.base, params.modulus), b as u64, params.modulus);
    }
    hash
}

/// Fast modular exponentiation by squaring.
fn pow_mod(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    let mut result = 1 % modulus;
    base %= modulus;

    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        exp >>= 1;
    }

    result
}

#[inline]
fn add_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 + b as u128) % m as u128) as u64
}

/// Subtraction in `[0, m)`. The modulus is added back before subtracting so
/// the intermediate value never goes negative.
#[inline]
fn sub_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 + m as u128 - b as u128 % m as u128) % m as u128) as u64
}

#[inline]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}
