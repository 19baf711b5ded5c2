//! Developer inspector for combat content.
//!
//! Lists the classified move catalog, prints combo graphs and replays
//! scripted input through a combo state.
//! Run with: `cargo run -p combat-inspect -- <command>`

mod commands;
mod context;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use commands::{Graph, Moves, Simulate};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Inspect combat content
#[derive(Parser)]
#[command(name = "combat-inspect")]
#[command(about = "Inspect attack moves and combo graphs", long_about = None)]
#[command(version)]
struct Cli {
    /// Content data directory (overrides COMBAT_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Also write logs to `combat-inspect.log` in this directory
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List classified attack moves
    Moves(Moves),

    /// Validate and print a combo profile's graph
    Graph(Graph),

    /// Replay scripted input through a combo state
    Simulate(Simulate),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for COMBAT_DATA_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let _guard = setup_logging(cli.log_dir.as_deref())?;

    let factory = context::factory(cli.data_dir);
    match cli.command {
        Command::Moves(cmd) => cmd.execute(&factory),
        Command::Graph(cmd) => cmd.execute(&factory),
        Command::Simulate(cmd) => cmd.execute(&factory),
    }
}

/// Setup logging to stderr and, when requested, to a file.
///
/// The returned guard flushes the file writer when dropped.
fn setup_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::never(dir, "combat-inspect.log");
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = log_dir {
        tracing::info!("Log file: {}/combat-inspect.log", dir.display());
    }
    Ok(guard)
}
