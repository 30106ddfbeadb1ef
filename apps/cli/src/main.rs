//! Batch entry point: authenticate, fetch, convert, write files, exit.

use clap::Parser;

mod args;
mod logging;
mod oids;
mod output;
mod run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = args::Args::parse();
    logging::init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        artifact = ?args.artifact,
        "Starting value-set run"
    );

    run::run(&args).await
}
