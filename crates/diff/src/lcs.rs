use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Range;

use crate::sequence::Sequence;

/// One link in a candidate chain. `prev` indexes the arena entry holding
/// the rest of the chain.
#[derive(Debug, Clone, Copy)]
struct ChainNode {
    a_index: usize,
    b_index: usize,
    prev: Option<usize>,
}

/// Bookkeeping for the patience-style increasing-subsequence search.
///
/// `thresholds[k]` holds the smallest B-index that ends an increasing chain
/// of length `k + 1` seen so far, and `rank_heads[k]` points at the arena
/// node for the last link of that chain.
#[derive(Debug, Default)]
struct ChainIndex {
    thresholds: Vec<usize>,
    nodes: Vec<ChainNode>,
    rank_heads: Vec<usize>,
}

impl ChainIndex {
    fn new() -> Self {
        Self::default()
    }

    /// Try to place the candidate pair `(i, j)` into the thresholds,
    /// linking it to the best chain one rank below.
    ///
    /// `hint` is the rank the previous candidate for the same `i` took.
    /// Candidates arrive in descending B-index order, so the next one often
    /// replaces the entry bracketed by the hint without a binary search.
    /// Returns the rank taken, or `None` when `j` is already recorded at
    /// its rank.
    fn record(&mut self, i: usize, j: usize, hint: usize) -> Option<usize> {
        let rank = self.insert_threshold(j, hint)?;
        let prev = if rank > 0 {
            Some(self.rank_heads[rank - 1])
        } else {
            None
        };
        self.nodes.push(ChainNode {
            a_index: i,
            b_index: j,
            prev,
        });
        if rank == self.rank_heads.len() {
            self.rank_heads.push(self.nodes.len() - 1);
        } else {
            self.rank_heads[rank] = self.nodes.len() - 1;
        }
        Some(rank)
    }

    fn insert_threshold(&mut self, j: usize, hint: usize) -> Option<usize> {
        let thresholds = &mut self.thresholds;
        if hint != 0 && hint < thresholds.len() && thresholds[hint] > j && thresholds[hint - 1] < j
        {
            thresholds[hint] = j;
            return Some(hint);
        }
        if thresholds.last().map_or(true, |&last| j > last) {
            thresholds.push(j);
            return Some(thresholds.len() - 1);
        }
        let rank = thresholds.partition_point(|&end| end < j);
        if thresholds[rank] == j {
            return None;
        }
        thresholds[rank] = j;
        Some(rank)
    }

    /// Walk the back-links of the longest chain found, writing its pairs
    /// into `matches`.
    fn collect_into(self, matches: &mut [Option<usize>]) {
        let mut link = self.rank_heads.last().copied();
        while let Some(index) = link {
            let node = self.nodes[index];
            matches[node.a_index] = Some(node.b_index);
            link = node.prev;
        }
    }
}

/// The middle window left over once common prefix and suffix elements have
/// been paired off.
struct Window {
    a_start: usize,
    a_end: usize,
    b_start: usize,
    b_end: usize,
}

impl Window {
    fn a_range(&self) -> Range<usize> {
        self.a_start..self.a_end
    }

    fn b_range(&self) -> Range<usize> {
        self.b_start..self.b_end
    }
}

/// Pair off equal leading and trailing elements before the general search
/// runs. Returns `None` when either side is exhausted by the trimming, in
/// which case `matches` is already complete.
fn trim_common_ends<A, B, F>(
    a: &A,
    b: &B,
    eq: &mut F,
    matches: &mut [Option<usize>],
) -> Option<Window>
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    F: FnMut(&A::Item, &B::Item) -> bool,
{
    let (mut a_start, mut b_start) = (0, 0);
    let (mut a_end, mut b_end) = (a.len(), b.len());

    while a_start < a_end && b_start < b_end && eq(a.get(a_start), b.get(b_start)) {
        matches[a_start] = Some(b_start);
        a_start += 1;
        b_start += 1;
    }
    while a_start < a_end && b_start < b_end && eq(a.get(a_end - 1), b.get(b_end - 1)) {
        a_end -= 1;
        b_end -= 1;
        matches[a_end] = Some(b_end);
    }

    if a_start < a_end && b_start < b_end {
        Some(Window {
            a_start,
            a_end,
            b_start,
            b_end,
        })
    } else {
        None
    }
}

/// Compute the LCS pairing between `a` and `b` under structural equality.
///
/// Returns one entry per element of `a`: the B-index it is paired with in
/// the longest common subsequence, or `None` when it is unmatched. The
/// distinct values of the untrimmed part of B are indexed in a hash table,
/// so the candidate positions for each element of A are found without
/// rescanning B.
pub(crate) fn matches_hashed<A, B>(a: &A, b: &B) -> Vec<Option<usize>>
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    A::Item: Eq + Hash,
{
    let mut matches = vec![None; a.len()];
    let window = match trim_common_ends(a, b, &mut |x, y| x == y, &mut matches) {
        Some(window) => window,
        None => return matches,
    };

    let mut positions: HashMap<&A::Item, Vec<usize>> = HashMap::new();
    for j in window.b_range() {
        positions.entry(b.get(j)).or_default().push(j);
    }

    let mut chains = ChainIndex::new();
    for i in window.a_range() {
        let candidates = match positions.get(a.get(i)) {
            Some(candidates) => candidates,
            None => continue,
        };
        let mut hint = 0;
        for &j in candidates.iter().rev() {
            if let Some(rank) = chains.record(i, j, hint) {
                hint = rank;
            }
        }
    }
    chains.collect_into(&mut matches);
    matches
}

/// Compute the LCS pairing between `a` and `b` under a caller-supplied
/// comparator.
///
/// Without `Hash` on the elements the candidate positions for each `a[i]`
/// come from scanning the untrimmed part of B directly, so the comparator
/// is only ever invoked as `eq(&a[i], &b[j])`. The scan is iterated in
/// descending B-index order for the same reason the hashed position lists
/// are: one element of A must extend at most one chain per step.
pub(crate) fn matches_by<A, B, F>(a: &A, b: &B, eq: &mut F) -> Vec<Option<usize>>
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    F: FnMut(&A::Item, &B::Item) -> bool,
{
    let mut matches = vec![None; a.len()];
    let window = match trim_common_ends(a, b, eq, &mut matches) {
        Some(window) => window,
        None => return matches,
    };

    let mut chains = ChainIndex::new();
    for i in window.a_range() {
        let mut hint = 0;
        for j in window.b_range().rev() {
            if !eq(a.get(i), b.get(j)) {
                continue;
            }
            if let Some(rank) = chains.record(i, j, hint) {
                hint = rank;
            }
        }
    }
    chains.collect_into(&mut matches);
    matches
}
