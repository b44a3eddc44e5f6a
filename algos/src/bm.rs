use crate::StringSearch;

pub struct BM;

impl StringSearch for BM {
    type Config = ();
    type State = ();

    fn find_bytes(_state: Self::State, text: &[u8], pattern: &[u8]) -> Option<usize> {
        bm_find(text, pattern)
    }
}

/// Bad-character shift table for Boyer-Moore.
///
/// Every byte maps to a shift in `1..=pattern.len()`; bytes that do not occur
/// in the pattern (and the final byte, unless it also occurs earlier) keep the
/// default shift of `pattern.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftTable {
    shifts: [usize; 256],
}

impl ShiftTable {
    pub fn build(pattern: &[u8]) -> Self {
        let m = pattern.len();
        let mut shifts = [m; 256];

        // Every byte before the final one shifts by its distance to the end.
        // Later occurrences overwrite earlier ones, and the final byte never
        // overwrites an occurrence-based entry.
        if let Some((_, head)) = pattern.split_last() {
            for (idx, &b) in head.iter().enumerate() {
                shifts[b as usize] = m - 1 - idx;
            }
        }

        Self { shifts }
    }

    pub fn get(&self, byte: u8) -> usize {
        self.shifts[byte as usize]
    }
}

pub fn bm_find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0);
    }
    if pattern.len() > text.len() {
        return None;
    }

    let table = ShiftTable::build(pattern);
    bm_find_with(&table, text, pattern)
}

/// Boyer-Moore with the bad-character rule only (no good-suffix heuristic).
///
/// Each alignment is compared right to left; on mismatch the window shifts by
/// the table entry for the text byte aligned with the pattern's last position,
/// not the mismatching byte.
pub fn bm_find_with(table: &ShiftTable, text: &[u8], pattern: &[u8]) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return Some(0);
    }
    if m > n {
        return None;
    }

    let mut i = 0; // alignment of the pattern within the text

    while i <= n - m {
        let mut j = m;

        while j > 0 && pattern[j - 1] == text[i + j - 1] {
            j -= 1;
        }

        if j == 0 {
            return Some(i);
        }

        i += table.get(text[i + m - 1]);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bm_basic() {
        let hay = b"HERE IS A SIMPLE EXAMPLE";
        let pat = b"EXAMPLE";
        assert_eq!(bm_find(hay, pat), Some(17));
    }

    #[test]
    fn test_bm_not_found() {
        let hay = b"ABCDEF";
        let pat = b"XYZ";
        assert_eq!(bm_find(hay, pat), None);
    }

    #[test]
    fn test_bm_pattern_equals_text() {
        assert_eq!(bm_find(b"EXAMPLE", b"EXAMPLE"), Some(0));
        assert_eq!(bm_find(b"EXAMPLX", b"EXAMPLE"), None);
    }

    #[test]
    fn test_bm_match_at_end() {
        let hay = b"aaaaaaaxyz";
        let pat = b"xyz";
        assert_eq!(bm_find(hay, pat), Some(7));
    }

    #[test]
    fn test_bm_repeated_characters() {
        assert_eq!(bm_find(b"aabaa", b"aa"), Some(0));
        assert_eq!(bm_find(b"abababab", b"bab"), Some(1));
        assert_eq!(bm_find(b"AAAAAA", b"AAA"), Some(0));
    }

    #[test]
    fn test_shift_table_default_is_pattern_length() {
        let table = ShiftTable::build(b"EXAMPLE");
        assert_eq!(table.get(b'Q'), 7);
        assert_eq!(table.get(0), 7);
    }

    #[test]
    fn test_shift_table_rightmost_occurrence_wins() {
        // E occurs at index 0 and 6 (final); the occurrence at 0 gives it a
        // shift of 6 and the final position must not overwrite that.
        let table = ShiftTable::build(b"EXAMPLE");
        assert_eq!(table.get(b'E'), 6);
        assert_eq!(table.get(b'X'), 5);
        assert_eq!(table.get(b'A'), 4);
        assert_eq!(table.get(b'M'), 3);
        assert_eq!(table.get(b'P'), 2);
        assert_eq!(table.get(b'L'), 1);
    }

    #[test]
    fn test_shift_table_unique_final_character_keeps_default() {
        let table = ShiftTable::build(b"abcd");
        assert_eq!(table.get(b'd'), 4);
        assert_eq!(table.get(b'a'), 3);
        assert_eq!(table.get(b'c'), 1);
    }

    #[test]
    fn test_shift_table_values_in_bounds() {
        for pat in [&b"EXAMPLE"[..], b"AAA", b"abcabc", b"z"] {
            let table = ShiftTable::build(pat);
            for byte in 0..=255u8 {
                let shift = table.get(byte);
                assert!(shift >= 1 && shift <= pat.len());
            }
        }
    }

    #[test]
    fn test_bm_with_reused_table() {
        let pat = b"needle";
        let table = ShiftTable::build(pat);
        assert_eq!(bm_find_with(&table, b"haystack with a needle in it", pat), Some(16));
        assert_eq!(bm_find_with(&table, b"no such thing here", pat), None);
    }
}
