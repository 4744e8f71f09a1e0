use core::cmp::Ordering;

use super::Depth;

/// Stable sort key for registry entries.
///
/// Ordering rules:
/// 1) `depth`: ascending (back-to-front)
/// 2) `seq`: ascending (registration order for equal depths)
///
/// Keys are built at sort time from the depth currently stored in the arena,
/// so a key can never disagree with its object.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SortKey {
    pub depth: Depth,
    /// Registration index within the same depth, ensuring stable ordering.
    pub seq: u64,
}

impl SortKey {
    #[inline]
    pub const fn new(depth: Depth, seq: u64) -> Self {
        Self { depth, seq }
    }
}

impl Ord for SortKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match self.depth.cmp(&other.depth) {
            Ordering::Equal => self.seq.cmp(&other.seq),
            o => o,
        }
    }
}

impl PartialOrd for SortKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
