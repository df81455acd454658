// Generic sequence diff engine
// This crate computes minimal edit records between two ordered sequences

mod difference;
mod lcs;
mod sequence;
mod sequence_diff;

pub use difference::{DiffKind, DiffRange, Difference};
pub use sequence::Sequence;
pub use sequence_diff::{diff, diff_by, try_diff_by, SequenceDiff};
