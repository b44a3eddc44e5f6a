mod bm;
mod kmp;
mod rk;

use thiserror::Error;

pub trait StringSearch {
    type Config;
    type State;

    fn build(_config: Self::Config) -> Self::State {
        unimplemented!("this algorithm doesnt use build");
    }
    fn find_bytes(state: Self::State, text: &[u8], pattern: &[u8]) -> Option<usize>;
    fn find(state: Self::State, text: &str, pattern: &str) -> Option<usize> {
        let text_bytes = text.as_bytes();
        let pattern_bytes = pattern.as_bytes();
        Self::find_bytes(state, text_bytes, pattern_bytes)
    }
}

/// Precondition failures a caller must reject before running any matcher.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("pattern must not be empty")]
    EmptyPattern,
    #[error("pattern length {pattern} exceeds text length {text}")]
    PatternLongerThanText { pattern: usize, text: usize },
}

/// Reject invalid (text, pattern) pairs up front instead of letting a matcher
/// silently report "absent" for them.
pub fn validate_input(text: &[u8], pattern: &[u8]) -> Result<(), InputError> {
    if pattern.is_empty() {
        return Err(InputError::EmptyPattern);
    }
    if pattern.len() > text.len() {
        return Err(InputError::PatternLongerThanText {
            pattern: pattern.len(),
            text: text.len(),
        });
    }
    Ok(())
}

pub use bm::{BM, ShiftTable, bm_find, bm_find_with};
pub use kmp::{KMP, build_failure_function, kmp_find, kmp_find_with};
pub use rk::{RK, RkParams, RollingHash, rk_find, rk_find_with};
