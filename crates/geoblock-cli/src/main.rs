//! geoblock — Command-line interface for geoblock-core
//!
//! Inspect geohashes the way the location service sees them: validity,
//! the block a query maps to, adjacent cells, and the 1+8 block fan-out.
//!
//! Usage examples
//! --------------
//!
//! - Validate against the policy's query minimum, or an explicit one
//!   $ geoblock validate u33d
//!   $ geoblock validate u33dc1v0x --min 9
//!
//! - Block and SQL LIKE pattern for a query geohash
//!   $ geoblock block U33DC1V
//!
//! - One step in a direction
//!   $ geoblock adjacent u33dc n
//!
//! - Surrounding cells (ordered n, ne, e, se, s, sw, w, nw)
//!   $ geoblock neighbors u33dc --labeled
//!   $ geoblock neighbors u33dc --cardinal
//!
//! - Area query fan-out, as JSON
//!   $ geoblock --json fanout u33dc1v
//!
//! Policy
//! ------
//!
//! Precisions default to 4 (query minimum), 5 (block) and 9 (entry). Use
//! `--policy <file.toml>` to override any of `query_min_precision`,
//! `block_precision` or `entry_precision`.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use geoblock_core::{adjacent_str, Block, Compass, Geocode, PrecisionPolicy};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Serialize)]
struct ValidationReport {
    geocode: String,
    precision: usize,
    min_precision: i32,
    valid: bool,
    has_precision: bool,
}

#[derive(Debug, Serialize)]
struct BlockReport {
    block: Block,
    like: String,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_policy(path: Option<&str>) -> anyhow::Result<PrecisionPolicy> {
    let Some(path) = path else {
        return Ok(PrecisionPolicy::default());
    };

    #[cfg(feature = "toml")]
    {
        let policy = PrecisionPolicy::load_from_file(path)
            .with_context(|| format!("loading policy from {path}"))?;
        debug!(?policy, "policy loaded");
        Ok(policy)
    }

    #[cfg(not(feature = "toml"))]
    {
        bail!("--policy {path}: built without TOML support")
    }
}

/// Block for `raw`, or an error naming the raw input.
fn admit(policy: &PrecisionPolicy, raw: &str) -> anyhow::Result<Block> {
    match policy.admit_query(&Geocode::new(raw)) {
        Some(block) => Ok(block),
        None => bail!(
            "{raw:?} is not a valid geohash of at least {} characters",
            policy.query_min_precision
        ),
    }
}

fn validate(policy: &PrecisionPolicy, raw: &str, min: Option<i32>) -> ValidationReport {
    let geocode = Geocode::new(raw);
    let min_precision = min.unwrap_or(policy.query_min_precision);
    ValidationReport {
        precision: geocode.precision(),
        valid: geocode.is_valid(),
        has_precision: geocode.has_min_precision(min_precision),
        geocode: geocode.into_string(),
        min_precision,
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let policy = load_policy(args.policy.as_deref())?;

    match args.command {
        Commands::Validate { geocode, min } => {
            let report = validate(&policy, &geocode, min);
            if args.json {
                print_json(&report)?;
            } else {
                println!("Geocode: {}", report.geocode);
                println!("Precision: {}", report.precision);
                println!("Alphabet: {}", if report.valid { "ok" } else { "invalid" });
                println!(
                    "Min precision {}: {}",
                    report.min_precision,
                    if report.has_precision { "ok" } else { "too short" }
                );
            }
            if !(report.valid && report.has_precision) {
                std::process::exit(1);
            }
        }

        Commands::Block { geocode } => {
            let block = admit(&policy, &geocode)?;
            let report = BlockReport {
                like: block.like_pattern(),
                block,
            };
            if args.json {
                print_json(&report)?;
            } else {
                println!("Block: {}", report.block);
                println!("LIKE: {}", report.like);
            }
        }

        Commands::Adjacent {
            geocode,
            direction,
        } => {
            let next = adjacent_str(&geocode, &direction)
                .with_context(|| format!("adjacent({geocode:?}, {direction:?})"))?;
            if args.json {
                print_json(&next)?;
            } else {
                println!("{next}");
            }
        }

        Commands::Neighbors {
            geocode,
            labeled,
            cardinal,
        } => {
            let geocode = Geocode::new(&geocode);
            if cardinal {
                let cells = geocode.cardinal_neighbors()?;
                if args.json {
                    print_json(&cells)?;
                } else {
                    for cell in cells {
                        println!("{cell}");
                    }
                }
            } else if labeled || args.json {
                let cells = geocode.neighbors_labeled()?;
                if args.json {
                    print_json(&cells)?;
                } else {
                    for (compass, cell) in cells.iter() {
                        println!("{:<2} {cell}", compass.label());
                    }
                }
            } else {
                for cell in geocode.neighbors()? {
                    println!("{cell}");
                }
            }
        }

        Commands::Fanout { geocode } => {
            let block = admit(&policy, &geocode)?;
            let area = block.surrounding()?;
            if args.json {
                let reports: Vec<_> = area
                    .into_iter()
                    .map(|block| BlockReport {
                        like: block.like_pattern(),
                        block,
                    })
                    .collect();
                print_json(&reports)?;
            } else {
                let labels = std::iter::once("center").chain(Compass::ALL.iter().map(|c| c.label()));
                for (label, block) in labels.zip(area.iter()) {
                    println!("{label:<6} {}", block.like_pattern());
                }
            }
        }
    }

    Ok(())
}
