use anyhow::Result;
use clap::Parser;
use frases::build::build_site;
use frases::config::{Config, PROJECT_FILE};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Generates one static HTML page per line of `frases.txt`, rendered through
/// `plantilla.html` into the `frases/` directory. Paths and labels can be
/// overridden in an optional `frases.yaml`.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .without_time()
        .init();

    let config = Config::from_directory(Path::new("."))?;
    tracing::debug!(project_file = PROJECT_FILE, ?config, "configuration loaded");
    run(&config)
}

/// Builds the pages and decides how the process ends. Missing or empty inputs
/// are reported and end the run cleanly, since nothing has been written at
/// that point; any other failure is returned and exits non-zero.
fn run(config: &Config) -> Result<()> {
    match build_site(config) {
        Ok(_) => Ok(()),
        Err(e) if e.is_abort() => {
            eprintln!("ERROR: {}", e);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
