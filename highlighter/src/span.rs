//! Half-open spans over grapheme positions.

use serde::{Deserialize, Serialize};

/// A half-open interval `[start, end)` over user-perceived character positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "reversed span {}..{}", start, end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True overlap only. Spans that merely touch (`a.end == b.start`) do not
    /// overlap, and an empty span overlaps nothing.
    pub fn overlaps(&self, other: &Span) -> bool {
        !(self.is_empty()
            || other.is_empty()
            || other.end <= self.start
            || self.end <= other.start)
    }

    /// Smallest span covering both.
    pub fn union(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Intersection with `window`, or `None` when nothing of `self` is left.
    pub fn clip(&self, window: &Span) -> Option<Span> {
        let start = self.start.max(window.start);
        let end = self.end.min(window.end);
        (start < end).then_some(Span { start, end })
    }

    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}
