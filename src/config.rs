use crate::utils::divup;
use crate::{RTreeError, RTreeResult};

pub const DEFAULT_MAX_ENTRIES: usize = 9;
const MIN_MAX_ENTRIES: usize = 4;
const MIN_MIN_ENTRIES: usize = 2;

/// Fanout limits of a tree, fixed for the lifetime of the tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RTreeConfig {
    max_entries: usize,
    min_entries: usize,
}

impl Default for RTreeConfig {
    fn default() -> Self {
        RTreeConfig::new(DEFAULT_MAX_ENTRIES)
    }
}

impl RTreeConfig {
    /// Config with the given fanout cap (raised to at least 4) and a fill
    /// floor of 40% of it.
    pub fn new(max_entries: usize) -> Self {
        let max_entries = max_entries.max(MIN_MAX_ENTRIES);
        let min_entries = divup(max_entries * 2, 5).max(MIN_MIN_ENTRIES);
        RTreeConfig {
            max_entries,
            min_entries,
        }
    }

    /// Override the fill floor.
    ///
    /// A split of `max_entries + 1` entries must leave both halves with at
    /// least `min_entries`, so the floor may be at most half the cap.
    pub fn with_min_entries(self, min_entries: usize) -> RTreeResult<Self> {
        if min_entries < MIN_MIN_ENTRIES || 2 * min_entries > self.max_entries {
            return Err(RTreeError::InvalidConfig {
                max_entries: self.max_entries,
                min_entries,
            });
        }
        Ok(RTreeConfig {
            min_entries,
            ..self
        })
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn min_entries(&self) -> usize {
        self.min_entries
    }
}
