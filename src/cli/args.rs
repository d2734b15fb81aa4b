use crate::core::ScenarioKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "concurrency_sandbox")]
#[command(about = "A sandbox for channel, wait-group and deadlock experiments")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one channel/task interaction scenario
    Goroutine {
        /// Scenario to run
        #[arg(short, long, value_enum, default_value = "no-buffer")]
        scenario: ScenarioKind,

        /// Configuration preset (default, fast)
        #[arg(short, long, default_value = "default")]
        preset: String,

        /// JSON configuration file (overrides the preset)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Length of one time unit in milliseconds
        #[arg(long)]
        time_unit_ms: Option<u64>,

        /// Give up waiting after this many milliseconds and report the scenario as blocked
        #[arg(short, long)]
        watchdog_ms: Option<u64>,

        /// Print lifecycle transitions to stderr
        #[arg(short, long)]
        verbose: bool,
    },
}
