//! Command-line and environment configuration.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

/// Extract quiz questions from table-formatted documents and search them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory that document paths are resolved against
    #[arg(long, env = "QUIZ_DOCS_DIR", global = true)]
    pub docs_dir: Option<PathBuf>,

    /// Give up loading a document after this many seconds
    #[arg(long, env = "QUIZ_LOAD_TIMEOUT_SECS", default_value_t = 30, global = true)]
    pub load_timeout_secs: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    pub format: Format,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn load_timeout(&self) -> Duration {
        Duration::from_secs(self.load_timeout_secs)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every question found in a document
    Extract { document: String },
    /// Print the questions matching each query
    Search {
        document: String,
        #[arg(required = true)]
        queries: Vec<String>,
    },
    /// Read queries from stdin, one per line
    Interactive { document: String },
}

impl Command {
    pub fn document(&self) -> &str {
        match self {
            Self::Extract { document }
            | Self::Search { document, .. }
            | Self::Interactive { document } => document,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}
