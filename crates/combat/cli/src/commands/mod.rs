//! Inspector subcommands.

mod graph;
mod moves;
mod simulate;

pub use graph::Graph;
pub use moves::Moves;
pub use simulate::Simulate;

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Summary,
    /// Full JSON output
    Json,
}
