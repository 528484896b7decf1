//! Binder tree indices and ranges.

use std::fmt;

/// Index of a node in a [`BoundTree`](super::BoundTree).
///
/// Node identity is index identity: two structurally identical nodes at
/// different positions have different ids, and a node reused by several
/// parents is referenced through the same id.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct BoundId(u32);

impl BoundId {
    /// Invalid node ID (sentinel for an absent child).
    pub const INVALID: BoundId = BoundId(u32::MAX);

    #[inline]
    pub const fn new(index: u32) -> Self {
        BoundId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for BoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "BoundId({})", self.0)
        } else {
            write!(f, "BoundId::INVALID")
        }
    }
}

impl Default for BoundId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Contiguous slice of the tree's child-id list.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct BoundRange {
    pub start: u32,
    pub len: u32,
}

impl BoundRange {
    pub const EMPTY: BoundRange = BoundRange { start: 0, len: 0 };

    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        BoundRange { start, len }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }
}

/// Contiguous slice of the tree's symbol-id list (scope locals).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SymbolRange {
    pub start: u32,
    pub len: u32,
}

impl SymbolRange {
    pub const EMPTY: SymbolRange = SymbolRange { start: 0, len: 0 };

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Index of an [`ArgumentList`](super::ArgumentList) side-table entry.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct ArgListId(u32);

impl ArgListId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ArgListId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}
