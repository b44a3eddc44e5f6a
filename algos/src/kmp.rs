use crate::StringSearch;

pub struct KMP;

impl StringSearch for KMP {
    type Config = ();
    type State = ();

    fn find_bytes(_state: Self::State, text: &[u8], pattern: &[u8]) -> Option<usize> {
        kmp_find(text, pattern)
    }
}

/// Build the KMP failure function: `failure[i]` is the length of the longest
/// proper prefix of `pattern[..=i]` that is also a suffix of it.
///
/// `failure[0]` is always 0 and `failure[i] <= i` for every position.
pub fn build_failure_function(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let mut failure = vec![0; m];

    let mut len = 0;
    let mut i = 1;

    while i < m {
        if pattern[i] == pattern[len] {
            len += 1;
            failure[i] = len;
            i += 1;
        } else if len != 0 {
            // Fall back without advancing i; this is what keeps the
            // construction linear.
            len = failure[len - 1];
        } else {
            failure[i] = 0;
            i += 1;
        }
    }

    failure
}

pub fn kmp_find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0); // convention: empty pattern matches at 0
    }
    if pattern.len() > text.len() {
        return None;
    }

    let failure = build_failure_function(pattern);
    kmp_find_with(&failure, text, pattern)
}

/// Same as [`kmp_find`] but reuses a precomputed failure function, so one
/// pattern can be scanned against many texts.
pub fn kmp_find_with(failure: &[usize], text: &[u8], pattern: &[u8]) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return Some(0);
    }
    if m > n {
        return None;
    }

    let mut i = 0; // text cursor
    let mut j = 0; // pattern cursor

    while i < n {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;

            if j == m {
                // full match ending at i-1; first match only
                return Some(i - j);
            }
        } else if j != 0 {
            j = failure[j - 1];
        } else {
            i += 1;
        }
    }

    None
}
