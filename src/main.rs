use anyhow::Result;
use transcheck::cli::{self, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load env variables from .env if present
    let _ = dotenvy::dotenv();
    // stdout carries the report, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = <Cli as clap::Parser>::parse();
    cli::handle_check(cli)
}
