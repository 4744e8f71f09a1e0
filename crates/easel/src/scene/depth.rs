use core::cmp::Ordering;

/// Paint-order key for scene objects.
///
/// Higher values paint later and therefore appear on top.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Depth(pub i32);

impl Depth {
    /// Depth assigned to objects that never asked for one.
    pub const DEFAULT: Depth = Depth(50);

    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }

    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl Default for Depth {
    fn default() -> Self {
        Depth::DEFAULT
    }
}

impl Ord for Depth {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for Depth {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
