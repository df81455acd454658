use anyhow::Result;
use sequence_diff::SequenceDiff;

fn main() -> Result<()> {
    // The engine is generic over elements, so diffing text line by line is
    // just a matter of splitting first
    let old_text = "fn main() {\n    println!(\"Hello, world!\");\n}\n";
    let new_text = "fn main() {\n    let name = \"Rust\";\n    println!(\"Hello, {}!\", name);\n}\n";

    let old_lines: Vec<&str> = old_text.lines().collect();
    let new_lines: Vec<&str> = new_text.lines().collect();

    let diff = SequenceDiff::new(&old_lines, &new_lines);

    println!("{} record(s):", diff.count());
    for record in diff.differences() {
        println!("{}", record);

        if let Some(deleted) = record.deleted {
            for index in deleted.to_range() {
                println!("  -{}", old_lines[index]);
            }
        }
        if let Some(added) = record.added {
            for index in added.to_range() {
                println!("  +{}", new_lines[index]);
            }
        }
    }

    Ok(())
}
