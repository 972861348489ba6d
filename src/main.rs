use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod config;
mod input;
mod lookup;
mod manifest;
mod output;
mod pack;
mod paths;
mod transform;

use cli::RootArgs;
use config::PackConfig;

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = RootArgs::parse();
    init_tracing(args.verbose);

    let config = PackConfig::from_args(&args)?;
    tracing::debug!(?config, "resolved run configuration");
    let pack = pack::assemble(&config)?;
    tracing::info!(
        root = %pack.paths.root().display(),
        jurisdiction = %pack.manifest.jurisdiction,
        corridor = %pack.manifest.corridor,
        "story pack complete"
    );
    println!("{}", pack.manifest_json);
    Ok(())
}
