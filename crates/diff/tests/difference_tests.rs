use pretty_assertions::assert_eq;
use sequence_diff::{DiffKind, DiffRange, Difference};

#[test]
fn test_added_record() {
    let record = Difference::added(DiffRange::new(2, 4));

    assert_eq!(record.kind, DiffKind::Added);
    assert_eq!(record.deleted, None);
    assert_eq!(record.added, Some(DiffRange::new(2, 4)));
    assert_eq!(record.deleted_len(), 0);
    assert_eq!(record.added_len(), 3);
}

#[test]
fn test_deleted_record() {
    let record = Difference::deleted(DiffRange::new(5, 5));

    assert_eq!(record.kind, DiffKind::Deleted);
    assert_eq!(record.deleted, Some(DiffRange::point(5)));
    assert_eq!(record.added, None);
    assert_eq!(record.deleted_len(), 1);
    assert_eq!(record.added_len(), 0);
}

#[test]
fn test_changed_record() {
    let record = Difference::changed(DiffRange::new(1, 2), DiffRange::new(3, 4));

    assert_eq!(record.kind, DiffKind::Changed);
    assert_eq!(record.deleted_len(), 2);
    assert_eq!(record.added_len(), 2);
}

#[test]
fn test_range_methods() {
    let range = DiffRange::new(10, 14);

    assert_eq!(range.start, 10);
    assert_eq!(range.end, 14);
    assert_eq!(range.len(), 5);
    assert!(range.contains(10));
    assert!(range.contains(14));
    assert!(!range.contains(9));
    assert!(!range.contains(15));
    assert_eq!(range.to_range(), 10..15);

    // A point range covers exactly its own index
    let point = DiffRange::point(3);
    assert_eq!(point, DiffRange::new(3, 3));
    assert_eq!(point.len(), 1);
    assert!(point.contains(3));
    assert!(!point.contains(4));
    assert_eq!(point.to_range(), 3..4);
}

#[test]
fn test_kind_display() {
    assert_eq!(DiffKind::Added.to_string(), "Added");
    assert_eq!(DiffKind::Deleted.to_string(), "Deleted");
    assert_eq!(DiffKind::Changed.to_string(), "Changed");
}

#[test]
fn test_record_display() {
    insta::assert_snapshot!(
        Difference::changed(DiffRange::new(1, 2), DiffRange::new(1, 3)),
        @"Changed from[1..2] -> to[1..3]"
    );
    insta::assert_snapshot!(
        Difference::deleted(DiffRange::new(0, 4)),
        @"Deleted from[0..4]"
    );
    insta::assert_snapshot!(
        Difference::added(DiffRange::point(7)),
        @"Added to[7..7]"
    );
}
