use anyhow::Result;
use sequence_diff::{DiffKind, SequenceDiff};

fn main() -> Result<()> {
    // Two sample sequences to compare
    let from = vec!["alpha", "bravo", "charlie", "delta", "echo"];
    let to = vec!["alpha", "xray", "yankee", "echo"];

    let diff = SequenceDiff::new(&from, &to);

    // Print diff statistics
    println!("Diff statistics:");
    println!("  Total records: {}", diff.count());
    println!("  Added elements: {}", diff.added_items());
    println!("  Deleted elements: {}", diff.deleted_items());
    println!("  Unchanged elements: {}", diff.unchanged_items());

    // Print each record along with the elements it covers
    println!("\nRecords:");
    for (i, record) in diff.differences().iter().enumerate() {
        println!("Record {}: {}", i + 1, record);

        if let Some(deleted) = record.deleted {
            let elements: Vec<_> = deleted.to_range().map(|index| from[index]).collect();
            println!("  removed: {:?}", elements);
        }
        if let Some(added) = record.added {
            let elements: Vec<_> = added.to_range().map(|index| to[index]).collect();
            println!("  inserted: {:?}", elements);
        }
        if record.kind == DiffKind::Changed {
            println!("  (one-for-one substitution)");
        }
    }

    Ok(())
}
