#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{Parser, Subcommand};
use output::OutputMode;
use std::env;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "feedline: activity feed transformation pipeline",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags.
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Transform a raw activity payload into a display-ready feed",
        long_about = "Run the six-stage pipeline over an already-fetched activities payload \
                      and print the transformed feed.",
        after_help = "EXAMPLES:\n    # Transform a task feed\n    fl transform activities.json\n\n    # Version detail view with project metadata\n    fl transform activities.json --project-info project.json --entity-type version\n\n    # Machine-readable output\n    fl transform activities.json --json"
    )]
    Transform(cmd::transform::TransformArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("FEEDLINE_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "feedline=debug,info"
        } else {
            "feedline=info,warn"
        })
    });

    let format = env::var("FEEDLINE_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false)).init();
        }
        _ => {
            registry.with(fmt::layer().compact()).init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mode = cli.output_mode();
    match &cli.command {
        Commands::Transform(args) => cmd::transform::run(args, mode),
    }
}
