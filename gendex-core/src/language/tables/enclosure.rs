//! Enclosure (bracket/quote) mapping with O(1) lookup
//!
//! Handles paired delimiters with support for symmetric quotes.

use crate::language::interface::EnclosureInfo;
use std::collections::HashMap;

/// Enclosure character mapping table
#[derive(Debug, Clone, Default)]
pub struct EncTable {
    map: HashMap<char, EnclosureInfo>,
}

impl EncTable {
    /// Create from `(open, close, symmetric)` pairs
    pub fn new(pairs: impl IntoIterator<Item = (char, char, bool)>) -> Self {
        let mut map = HashMap::new();

        for (open, close, symmetric) in pairs {
            if symmetric {
                let info = EnclosureInfo {
                    delta: 0,
                    symmetric: true,
                };
                map.insert(open, info);
                map.insert(close, info);
            } else {
                let side = |delta| EnclosureInfo {
                    delta,
                    symmetric: false,
                };
                map.insert(open, side(1));
                map.insert(close, side(-1));
            }
        }

        Self { map }
    }

    /// Look up enclosure info for character
    #[inline]
    pub fn get(&self, ch: char) -> Option<EnclosureInfo> {
        self.map.get(&ch).copied()
    }
}
