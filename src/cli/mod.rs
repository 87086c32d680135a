//! CLI argument definitions for Stint.

use clap::{Parser, Subcommand};

/// Version string with build metadata from the build script.
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("STN_GIT_COMMIT"),
    " ",
    env!("STN_BUILD_TIMESTAMP"),
    ")"
);

/// Stint - a task list that tracks how long each task took.
#[derive(Parser, Debug)]
#[command(name = "stn")]
#[command(author, version = VERSION, about = "A CLI task list that tracks how long each task took", long_about = None)]
pub struct Cli {
    /// Output in human-readable format instead of JSON
    #[arg(short = 'H', long = "human", global = true)]
    pub human_readable: bool,

    /// Store data under <path> instead of the platform data directory.
    /// Can also be set via STINT_DATA_DIR environment variable.
    #[arg(long = "data-dir", global = true, env = "STINT_DATA_DIR")]
    pub data_dir: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task text
        text: String,
    },

    /// List tasks with counts
    List {
        /// Which tasks to show: all, active, or completed
        #[arg(short, long, default_value = "all")]
        filter: String,
    },

    /// Toggle a task between active and completed
    Toggle {
        /// Task ID (e.g., st-1756000000000-a1b2c3d)
        id: String,
    },

    /// Edit the text of an active task
    Edit {
        /// Task ID
        id: String,

        /// New task text
        text: String,
    },

    /// Delete a task
    Rm {
        /// Task ID
        id: String,
    },

    /// Remove all completed tasks
    Clear,

    /// Show task counts
    Stats,

    /// Show recent command history
    Log {
        /// Maximum number of entries to show
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
}
