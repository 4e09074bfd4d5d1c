use clap::{Parser, Subcommand};

/// CLI arguments for geoblock
#[derive(Debug, Parser)]
#[command(
    name = "geoblock",
    version,
    about = "Validate geohashes, derive query blocks and compute neighboring cells"
)]
pub struct CliArgs {
    /// Path to a TOML precision policy (default: 4 / 5 / 9)
    #[arg(short = 'p', long = "policy", global = true)]
    pub policy: Option<String>,

    /// Print results as JSON
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check a geohash against the alphabet and a minimum precision
    Validate {
        geocode: String,

        /// Minimum precision (default: the policy's query minimum)
        #[arg(short = 'm', long = "min")]
        min: Option<i32>,
    },

    /// Show the block a query geohash maps to, with its LIKE pattern
    Block { geocode: String },

    /// Show the cell adjacent to a geohash in one direction
    Adjacent {
        geocode: String,

        /// n, s, e or w
        direction: String,
    },

    /// List the cells surrounding a geohash
    Neighbors {
        geocode: String,

        /// Print compass labels next to each cell
        #[arg(short = 'l', long = "labeled")]
        labeled: bool,

        /// Only the four edge-sharing cells (n, e, s, w)
        #[arg(short = 'c', long = "cardinal", conflicts_with = "labeled")]
        cardinal: bool,
    },

    /// List the 1+8 blocks an area query around a geohash fans out to
    Fanout { geocode: String },
}
