use pretty_assertions::assert_eq;
use sequence_diff::{diff, diff_by, DiffRange, Difference, SequenceDiff};

#[test]
fn test_single_element_sequences() {
    let same = diff(&['a'], &['a']);
    assert_eq!(same, Vec::<Difference>::new());

    let different = diff(&['a'], &['b']);
    assert_eq!(
        different,
        vec![Difference::changed(DiffRange::point(0), DiffRange::point(0))]
    );
}

#[test]
fn test_repeated_element_grows_by_one() {
    // The common prefix is paired off, the extra copy trails as an addition
    let a = vec!['a'];
    let b = vec!['a', 'a'];

    assert_eq!(diff(&a, &b), vec![Difference::added(DiffRange::point(1))]);
}

#[test]
fn test_repeated_element_shrinks_by_one() {
    let a = vec!['a', 'a'];
    let b = vec!['a'];

    assert_eq!(diff(&a, &b), vec![Difference::deleted(DiffRange::point(1))]);
}

#[test]
fn test_all_elements_identical() {
    // Heavy duplication still pairs min(n, m) elements and nothing else
    let a = vec![7u8; 40];
    let b = vec![7u8; 25];

    let records = diff(&a, &b);
    assert_eq!(records, vec![Difference::deleted(DiffRange::new(25, 39))]);
}

#[test]
fn test_swapped_ends() {
    // x a -> a x can keep only one element; the other is deleted and
    // re-added on the far side
    let a = vec!['x', 'a'];
    let b = vec!['a', 'x'];

    let records = diff(&a, &b);
    assert_eq!(
        records,
        vec![
            Difference::deleted(DiffRange::point(0)),
            Difference::added(DiffRange::point(1)),
        ]
    );
}

#[test]
fn test_change_at_the_very_start() {
    let a = vec![9, 2, 3];
    let b = vec![1, 2, 3];

    let records = diff(&a, &b);
    assert_eq!(
        records,
        vec![Difference::changed(DiffRange::point(0), DiffRange::point(0))]
    );
}

#[test]
fn test_change_at_the_very_end() {
    let a = vec![1, 2, 3];
    let b = vec![1, 2, 9];

    let records = diff(&a, &b);
    assert_eq!(
        records,
        vec![Difference::changed(DiffRange::point(2), DiffRange::point(2))]
    );
}

#[test]
fn test_interleaved_duplicates() {
    // a b a b against b a b a: the engine must not pair crossing copies
    let a = vec!['a', 'b', 'a', 'b'];
    let b = vec!['b', 'a', 'b', 'a'];

    let records = diff(&a, &b);
    let deleted: usize = records.iter().map(|d| d.deleted_len()).sum();
    let added: usize = records.iter().map(|d| d.added_len()).sum();

    // LCS has length three, so exactly one element falls on each side
    assert_eq!(deleted, 1);
    assert_eq!(added, 1);
}

#[test]
fn test_string_elements() {
    let a = vec![String::from("naïve"), String::from("café")];
    let b = vec![String::from("naïve"), String::from("tea")];

    let records = diff(&a, &b);
    assert_eq!(
        records,
        vec![Difference::changed(DiffRange::point(1), DiffRange::point(1))]
    );
}

#[test]
fn test_large_sequences_with_sparse_changes() {
    let a: Vec<usize> = (0..1000).collect();
    let b: Vec<usize> = (0..1000).map(|i| if i % 100 == 0 { i + 5000 } else { i }).collect();

    let diff = SequenceDiff::new(&a, &b);

    // Every 100th element is substituted, nothing else moves
    assert_eq!(diff.count(), 10);
    assert_eq!(diff.deleted_items(), 10);
    assert_eq!(diff.added_items(), 10);
    assert_eq!(diff.unchanged_items(), 990);
}

#[test]
fn test_comparator_that_matches_everything() {
    // A degenerate comparator pairs the whole shorter side
    let a = vec![1, 2, 3, 4, 5];
    let b = vec![6, 7, 8];

    let records = diff_by(&a, &b, |_, _| true);
    assert_eq!(records, vec![Difference::deleted(DiffRange::new(3, 4))]);
}

#[test]
fn test_comparator_that_matches_nothing() {
    let a = vec![1, 1];
    let b = vec![1, 1, 1];

    let records = diff_by(&a, &b, |_, _| false);
    assert_eq!(
        records,
        vec![
            Difference::changed(DiffRange::new(0, 1), DiffRange::new(0, 1)),
            Difference::added(DiffRange::point(2)),
        ]
    );
}
