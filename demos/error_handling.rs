//! Error handling example for geoblock-rs
//!
//! Validation is a predicate you check first; errors only come back from the
//! adjacency engine when that check was skipped.

use geoblock_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== geoblock-rs Error Handling Example ===\n");

    // Example 1: Rejecting request input with the admission gate
    println!("--- Example 1: Validate before use ---");
    for raw in ["", "a1", "i0", "u3", "b0c1", "u33dc1v0x"] {
        let g = Geocode::new(raw);
        if g.is_valid_and_has_precision(4) {
            println!("  accepted: {g}");
        } else {
            println!("  rejected: {raw:?} (valid alphabet: {})", g.is_valid());
        }
    }
    println!();

    // Example 2: Skipped validation surfaces as InvalidArgument errors
    println!("--- Example 2: Unvalidated adjacency calls ---");
    for (geocode, direction) in [("", "n"), ("b", ""), ("b", "ne"), ("bail", "e")] {
        match adjacent_str(geocode, direction) {
            Ok(next) => println!("  {geocode:?} {direction:?} -> {next}"),
            Err(e) if e.is_invalid_argument() => println!("  invalid argument: {e}"),
            Err(e) => return Err(e),
        }
    }
    println!();

    // Example 3: A bad policy is refused up front
    println!("--- Example 3: Policy validation ---");
    let policy = PrecisionPolicy {
        block_precision: 3,
        ..Default::default()
    };
    match policy.validate() {
        Ok(()) => println!("  policy ok"),
        Err(e) => println!("  {e}"),
    }

    Ok(())
}
