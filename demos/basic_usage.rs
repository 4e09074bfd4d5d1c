//! Basic usage example for geoblock-rs
//!
//! This example demonstrates how to:
//! - Normalize and validate a raw geohash
//! - Cap precision for storage and for block queries
//! - Step to adjacent cells and list a neighborhood

use geoblock_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== geoblock-rs Basic Usage Example ===\n");

    // Example 1: Construction only lowercases
    println!("--- Example 1: Normalize and validate ---");
    let raw = "U33DC1V0XYZ";
    let geocode = Geocode::new(raw);
    println!("Raw: {raw}");
    println!("Canonical: {geocode}");
    println!("Precision: {}", geocode.precision());
    println!("Valid (min 9): {}", geocode.is_valid_and_has_precision(9));
    println!();

    // Example 2: Truncation
    println!("--- Example 2: Cap precision ---");
    println!("Stored (9): {}", geocode.with_max_precision(9));
    println!("Block (5): {}", geocode.with_max_precision(5));
    println!("Short input is not padded: {}", Geocode::new("u33").with_max_precision(5));
    println!();

    // Example 3: One step in each direction
    println!("--- Example 3: Adjacent cells ---");
    let block = geocode.with_max_precision(5);
    for direction in Direction::ALL {
        println!("{direction}: {}", block.adjacent(direction)?);
    }
    println!();

    // Example 4: The full neighborhood
    println!("--- Example 4: Neighbors of {block} ---");
    for (compass, cell) in block.neighbors_labeled()?.iter() {
        println!("{:<2} {cell}", compass.label());
    }

    Ok(())
}
