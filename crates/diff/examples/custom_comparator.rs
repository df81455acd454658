use anyhow::Result;
use sequence_diff::{diff, diff_by};

fn main() -> Result<()> {
    // Version strings that only differ in capitalization and a real change
    let from = vec!["Widget", "GADGET", "Gizmo"];
    let to = vec!["widget", "gadget", "doohickey"];

    // Structural equality treats every element as different
    println!("Structural equality:");
    for record in diff(&from, &to) {
        println!("  {}", record);
    }

    // A case-insensitive comparator pairs the first two elements
    println!("\nCase-insensitive comparator:");
    for record in diff_by(&from, &to, |a, b| a.eq_ignore_ascii_case(b)) {
        println!("  {}", record);
    }

    Ok(())
}
