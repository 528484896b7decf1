//! Source anchors.
//!
//! A [`Span`] is a compact byte range. An [`Anchor`] ties a node to the
//! surface syntax it came from, and records whether that syntax was
//! fabricated by the parser to fill a hole left by a parse error.

use std::fmt;

/// Source location span.
///
/// Layout: 8 bytes total
/// - start: u32 - byte offset from file start
/// - end: u32 - byte offset (exclusive)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Association between a node and its surface syntax.
///
/// Two anchors are equal when they cover the same span with the same
/// missing-ness. Error recovery relies on this: a wrapper attached to the
/// exact syntax of its only child is detected by anchor equality.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor {
    pub span: Span,
    /// The syntax is a zero-width placeholder inserted by the parser.
    pub is_missing: bool,
}

impl Anchor {
    /// Anchor for written syntax.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Anchor {
            span: Span::new(start, end),
            is_missing: false,
        }
    }

    /// Anchor for a placeholder the parser synthesized at `offset`.
    #[inline]
    pub const fn missing(offset: u32) -> Self {
        Anchor {
            span: Span::new(offset, offset),
            is_missing: true,
        }
    }
}

impl fmt::Debug for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_missing {
            write!(f, "missing@{:?}", self.span)
        } else {
            write!(f, "{:?}", self.span)
        }
    }
}
