use crate::config::{AppConfig, Cli, Command};
use crate::errors::ServerError;
use crate::router::handle;
use astra::Server;
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Read};
use std::net::SocketAddr;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod spreadsheets;
mod templates;


fn main() {
    let cli = Cli::parse();
    init_tracing(matches!(cli.command, Command::Score { verbose: true, .. }));

    let result = match cli.command {
        Command::Serve {
            addr,
            workers,
            max_body_bytes,
        } => serve(addr, workers, AppConfig { max_body_bytes }),
        Command::Score {
            input,
            out,
            verbose: _,
        } => score_file(&input, out.as_deref()),
        Command::Show { csv } => show_csv(&csv),
    };

    if let Err(e) = result {
        error!("❌ {e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    // Logs go to stderr so `score` can write CSV to stdout.
    tracing_subscriber::fmt()
        .with_env_filter(cli::log_filter(verbose, env.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

fn serve(addr: SocketAddr, workers: usize, cfg: AppConfig) -> Result<(), ServerError> {
    info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(workers);

    // Every request is scored on its own; the only shared thing is read-only config.
    server
        .serve(move |req, _info| match handle(req, &cfg) {
            Ok(resp) => resp,
            Err(err) => templates::html_error_response(err),
        })
        .map_err(|e| ServerError::Io(format!("Server ended with error: {e}")))?;

    info!("Server shut down cleanly.");
    Ok(())
}

/// Score a listings file (or stdin for "-") and write the CSV out.
fn score_file(input: &Path, out: Option<&Path>) -> Result<(), ServerError> {
    let source = input.display().to_string();
    let reader: Box<dyn Read> = if input == Path::new("-") {
        Box::new(std::io::stdin().lock())
    } else {
        Box::new(File::open(input)?)
    };

    match out {
        Some(path) => {
            let rows = cli::score(reader, &source, BufWriter::new(File::create(path)?))?;
            info!("✅ Wrote {rows} rows to {}", path.display());
        }
        None => {
            cli::score(reader, &source, std::io::stdout().lock())?;
        }
    }
    Ok(())
}

fn show_csv(path: &Path) -> Result<(), ServerError> {
    let rows = cli::show(File::open(path)?, std::io::stdout().lock())?;
    info!("{rows} rows in {}", path.display());
    Ok(())
}
