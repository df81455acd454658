use anyhow::Result;
use std::hash::Hash;

use crate::difference::{DiffRange, Difference};
use crate::lcs;
use crate::sequence::Sequence;

/// Accumulates difference records from the traversal event stream.
///
/// A single pending record absorbs contiguous runs of one-sided events;
/// any match event closes it. The pending state is explicit so the builder
/// can be exercised on its own.
#[derive(Debug, Default)]
struct DiffBuilder {
    pending: Option<PendingRecord>,
    records: Vec<Difference>,
}

/// The record currently being grown, before its kind is known.
#[derive(Debug, Clone, Copy)]
struct PendingRecord {
    deleted: Option<DiffRange>,
    added: Option<DiffRange>,
}

impl DiffBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Element `i` of the "from" sequence has no match.
    fn on_from_only(&mut self, i: usize) {
        let pending = self.pending.get_or_insert(PendingRecord {
            deleted: None,
            added: None,
        });
        match &mut pending.deleted {
            Some(range) => range.extend_to(i),
            None => pending.deleted = Some(DiffRange::point(i)),
        }
    }

    /// Element `j` of the "to" sequence has no match.
    fn on_to_only(&mut self, j: usize) {
        let pending = self.pending.get_or_insert(PendingRecord {
            deleted: None,
            added: None,
        });
        match &mut pending.added {
            Some(range) => range.extend_to(j),
            None => pending.added = Some(DiffRange::point(j)),
        }
    }

    /// A matched pair interrupts the current run; matches themselves are
    /// never recorded.
    fn on_match(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.records.push(pending.into_difference());
        }
    }

    fn finish(mut self) -> Vec<Difference> {
        self.on_match();
        self.records
    }
}

impl PendingRecord {
    fn into_difference(self) -> Difference {
        match (self.deleted, self.added) {
            (Some(deleted), Some(added)) => Difference::changed(deleted, added),
            (Some(deleted), None) => Difference::deleted(deleted),
            (None, Some(added)) => Difference::added(added),
            (None, None) => unreachable!("a pending record always covers at least one element"),
        }
    }
}

/// Walk the match mapping in lockstep over both sequences, turning it into
/// raw difference records.
fn traverse(matches: &[Option<usize>], b_len: usize) -> Vec<Difference> {
    let mut builder = DiffBuilder::new();
    let mut b_cursor = 0;

    for (i, matched) in matches.iter().enumerate() {
        match *matched {
            None => builder.on_from_only(i),
            Some(j) => {
                while b_cursor < j {
                    builder.on_to_only(b_cursor);
                    b_cursor += 1;
                }
                builder.on_match();
                b_cursor = j + 1;
            }
        }
    }
    while b_cursor < b_len {
        builder.on_to_only(b_cursor);
        b_cursor += 1;
    }
    builder.finish()
}

/// Split every unequal substitution so that a `Changed` record always pairs
/// elements one for one; the leftover tail becomes a pure deletion or
/// insertion. Pure records pass through untouched.
fn normalize(raw: Vec<Difference>) -> Vec<Difference> {
    let mut records = Vec::with_capacity(raw.len());
    for record in raw {
        let (deleted, added) = match (record.deleted, record.added) {
            (Some(deleted), Some(added)) => (deleted, added),
            _ => {
                records.push(record);
                continue;
            }
        };
        let (deleted_len, added_len) = (deleted.len(), added.len());
        if deleted_len > added_len {
            let split = deleted.start + added_len;
            records.push(Difference::changed(
                DiffRange::new(deleted.start, split - 1),
                added,
            ));
            records.push(Difference::deleted(DiffRange::new(split, deleted.end)));
        } else if added_len > deleted_len {
            let split = added.start + deleted_len;
            records.push(Difference::changed(
                deleted,
                DiffRange::new(added.start, split - 1),
            ));
            records.push(Difference::added(DiffRange::new(split, added.end)));
        } else {
            records.push(record);
        }
    }
    records
}

/// Compute the differences between two sequences using structural equality.
///
/// Returns the edit records that transform `a` into `b`, ordered by
/// ascending index into `a`. Matched elements appear in no record; every
/// `Changed` record pairs deleted and added elements one for one.
pub fn diff<A, B>(a: &A, b: &B) -> Vec<Difference>
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    A::Item: Eq + Hash,
{
    let matches = lcs::matches_hashed(a, b);
    normalize(traverse(&matches, b.len()))
}

/// Compute the differences between two sequences under a caller-supplied
/// comparator.
///
/// The comparator is only ever invoked as `eq(&a[i], &b[j])` and must
/// behave as a pure, self-consistent equivalence; the pairing produced
/// under an inconsistent predicate is unspecified.
pub fn diff_by<A, B, F>(a: &A, b: &B, mut eq: F) -> Vec<Difference>
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    F: FnMut(&A::Item, &B::Item) -> bool,
{
    let matches = lcs::matches_by(a, b, &mut eq);
    normalize(traverse(&matches, b.len()))
}

/// Like [`diff_by`], for comparators that can fail.
///
/// The first comparator error aborts the computation; it is returned to the
/// caller unmodified and no partial result is produced.
pub fn try_diff_by<A, B, F>(a: &A, b: &B, mut eq: F) -> Result<Vec<Difference>>
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    F: FnMut(&A::Item, &B::Item) -> Result<bool>,
{
    let mut failure = None;
    let records = diff_by(a, b, |x, y| {
        if failure.is_some() {
            return false;
        }
        match eq(x, y) {
            Ok(equal) => equal,
            Err(error) => {
                failure = Some(error);
                false
            }
        }
    });
    match failure {
        Some(error) => Err(error),
        None => Ok(records),
    }
}

/// The computed difference between two sequences
///
/// Holds the record list plus both input lengths; the elements themselves
/// are not retained, and no working state survives the computation.
#[derive(Debug, Clone)]
pub struct SequenceDiff {
    /// The difference records, ordered by ascending "from" index
    differences: Vec<Difference>,

    /// The number of elements in the "from" sequence
    from_len: usize,

    /// The number of elements in the "to" sequence
    to_len: usize,
}

impl SequenceDiff {
    /// Diff two sequences using structural equality
    pub fn new<A, B>(a: &A, b: &B) -> Self
    where
        A: Sequence + ?Sized,
        B: Sequence<Item = A::Item> + ?Sized,
        A::Item: Eq + Hash,
    {
        Self {
            differences: diff(a, b),
            from_len: a.len(),
            to_len: b.len(),
        }
    }

    /// Diff two sequences under a caller-supplied comparator
    pub fn with_comparator<A, B, F>(a: &A, b: &B, eq: F) -> Self
    where
        A: Sequence + ?Sized,
        B: Sequence + ?Sized,
        F: FnMut(&A::Item, &B::Item) -> bool,
    {
        Self {
            differences: diff_by(a, b, eq),
            from_len: a.len(),
            to_len: b.len(),
        }
    }

    /// Create an empty diff between two empty sequences
    pub fn empty() -> Self {
        Self {
            differences: Vec::new(),
            from_len: 0,
            to_len: 0,
        }
    }

    /// Get the difference records
    pub fn differences(&self) -> &[Difference] {
        &self.differences
    }

    /// Get a record by index
    pub fn difference(&self, index: usize) -> Option<&Difference> {
        self.differences.as_slice().get(index)
    }

    /// Get the number of records
    pub fn count(&self) -> usize {
        self.differences.len()
    }

    /// Check if the sequences differ at all
    pub fn has_changes(&self) -> bool {
        !self.differences.is_empty()
    }

    /// Get the number of elements in the "from" sequence
    pub fn from_len(&self) -> usize {
        self.from_len
    }

    /// Get the number of elements in the "to" sequence
    pub fn to_len(&self) -> usize {
        self.to_len
    }

    /// Get the total number of elements inserted from the "to" sequence
    pub fn added_items(&self) -> usize {
        self.differences.iter().map(|d| d.added_len()).sum()
    }

    /// Get the total number of elements removed from the "from" sequence
    pub fn deleted_items(&self) -> usize {
        self.differences.iter().map(|d| d.deleted_len()).sum()
    }

    /// Get the number of "from" elements left untouched by the edit script
    pub fn unchanged_items(&self) -> usize {
        self.from_len - self.deleted_items()
    }
}
