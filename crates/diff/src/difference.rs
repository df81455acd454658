use derive_more::Display;
use std::fmt;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents the kind of edit a difference record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiffKind {
    /// The record covers elements that only exist in the "to" sequence
    #[display(fmt = "Added")]
    Added,

    /// The record covers elements that only exist in the "from" sequence
    #[display(fmt = "Deleted")]
    Deleted,

    /// The record covers elements present in both sequences but different
    #[display(fmt = "Changed")]
    Changed,
}

/// An inclusive range of element indices into one sequence
///
/// Both bounds are covered, so a range is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffRange {
    /// The first index covered (0-based)
    pub start: usize,

    /// The last index covered (0-based, inclusive)
    pub end: usize,
}

impl DiffRange {
    /// Create a new inclusive range; `start` must not exceed `end`
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a range covering a single index
    pub fn point(index: usize) -> Self {
        Self {
            start: index,
            end: index,
        }
    }

    /// Get the number of indices covered; never zero
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Check if this range covers the given index
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }

    /// Convert to a standard half-open range
    pub fn to_range(&self) -> Range<usize> {
        self.start..self.end + 1
    }

    /// Grow the range so that its last covered index is `index`
    pub(crate) fn extend_to(&mut self, index: usize) {
        self.end = index;
    }
}

/// A contiguous block of non-matched elements between two sequences
///
/// Matched elements never appear in a record; a maximal run of unmatched
/// elements on either side becomes exactly one `Difference`. Records are
/// immutable value data once returned from a diff call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Difference {
    /// The kind of edit this record describes
    pub kind: DiffKind,

    /// The indices removed from the "from" sequence; `None` for `Added`
    pub deleted: Option<DiffRange>,

    /// The indices inserted from the "to" sequence; `None` for `Deleted`
    pub added: Option<DiffRange>,
}

impl Difference {
    /// Create a record describing an insertion from the "to" sequence
    pub fn added(added: DiffRange) -> Self {
        Self {
            kind: DiffKind::Added,
            deleted: None,
            added: Some(added),
        }
    }

    /// Create a record describing a removal from the "from" sequence
    pub fn deleted(deleted: DiffRange) -> Self {
        Self {
            kind: DiffKind::Deleted,
            deleted: Some(deleted),
            added: None,
        }
    }

    /// Create a record describing a one-for-one substitution
    pub fn changed(deleted: DiffRange, added: DiffRange) -> Self {
        Self {
            kind: DiffKind::Changed,
            deleted: Some(deleted),
            added: Some(added),
        }
    }

    /// Get the number of elements removed from the "from" sequence
    pub fn deleted_len(&self) -> usize {
        self.deleted.map_or(0, |range| range.len())
    }

    /// Get the number of elements inserted from the "to" sequence
    pub fn added_len(&self) -> usize {
        self.added.map_or(0, |range| range.len())
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.deleted, self.added) {
            (Some(deleted), Some(added)) => write!(
                f,
                "{} from[{}..{}] -> to[{}..{}]",
                self.kind, deleted.start, deleted.end, added.start, added.end
            ),
            (Some(deleted), None) => {
                write!(f, "{} from[{}..{}]", self.kind, deleted.start, deleted.end)
            }
            (None, Some(added)) => {
                write!(f, "{} to[{}..{}]", self.kind, added.start, added.end)
            }
            (None, None) => write!(f, "{}", self.kind),
        }
    }
}
