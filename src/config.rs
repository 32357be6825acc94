// src/config.rs

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Uploads and pasted text bigger than this are refused.
pub const DEFAULT_MAX_BODY_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Parser)]
#[command(name = "listing-scorer")]
#[command(about = "Score property listing text for beauty, virality and location growth")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the web interface
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,

        #[arg(long, default_value_t = 8)]
        workers: usize,

        #[arg(long, default_value_t = DEFAULT_MAX_BODY_BYTES)]
        max_body_bytes: usize,
    },
    /// Score a text file of listings and write CSV
    Score {
        /// Input file, or "-" for stdin
        input: PathBuf,

        /// Write CSV here instead of stdout
        #[arg(long, short)]
        out: Option<PathBuf>,

        /// Log every matched beauty keyword (debug level for this crate, even when RUST_LOG is set)
        #[arg(long, short)]
        verbose: bool,
    },
    /// Print a previously exported CSV as an aligned table
    Show {
        csv: PathBuf,
    },
}

/// Settings the request handler needs. Cheap to clone into the server closure.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub max_body_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}
