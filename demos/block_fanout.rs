//! Block fan-out example for geoblock-rs
//!
//! An area query is answered over the requested block and the eight blocks
//! around it. This prints the prefix patterns a storage layer would run.

use geoblock_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== geoblock-rs Block Fan-out Example ===\n");

    let policy = PrecisionPolicy::default();
    let query = Geocode::new("gcpvj0duq");

    let Some(block) = policy.admit_query(&query) else {
        println!("Query geohash {query} rejected");
        return Ok(());
    };

    println!("Query: {query}");
    println!("Block: {block} (precision {})\n", block.precision());

    let labels = std::iter::once("center").chain(Compass::ALL.iter().map(|c| c.label()));
    for (label, b) in labels.zip(block.surrounding()?.iter()) {
        println!("{label:<6} WHERE geohash LIKE '{}'", b.like_pattern());
    }

    // Entries are matched to blocks in memory with the same prefix rule.
    println!();
    let entry = Geocode::new("gcpvj0dzz");
    println!("{entry} in {block}: {}", block.contains(&entry));

    Ok(())
}
