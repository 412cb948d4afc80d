//! Sentence terminator lookup

/// Terminator set: a bitmask for ASCII plus a sorted list for the rest
#[derive(Debug, Clone, Default)]
pub struct TermTable {
    ascii: u128,
    other: Vec<char>,
}

impl TermTable {
    pub fn new(terminators: &[char]) -> Self {
        let mut table = Self::default();
        for &ch in terminators {
            if ch.is_ascii() {
                table.ascii |= 1u128 << (ch as u32);
            } else {
                table.other.push(ch);
            }
        }
        table.other.sort_unstable();
        table.other.dedup();
        table
    }

    #[inline]
    pub fn is_terminator(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii & (1u128 << (ch as u32)) != 0
        } else {
            self.other.binary_search(&ch).is_ok()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminator_lookup() {
        let table = TermTable::new(&['.', '!', '?', '…']);

        for ch in ['.', '!', '?', '…'] {
            assert!(table.is_terminator(ch), "{ch:?}");
        }
        for ch in [',', 'a', ';', '。', '\u{7f}'] {
            assert!(!table.is_terminator(ch), "{ch:?}");
        }
    }

    #[test]
    fn test_duplicates_and_empty() {
        let table = TermTable::new(&['…', '…', '.']);
        assert!(table.is_terminator('…'));
        assert!(!TermTable::new(&[]).is_terminator('.'));
    }
}
