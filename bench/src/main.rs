mod args;
mod plot;
mod runner;

use crate::args::PlotArgs;
use crate::runner::PlotRunner;
use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

fn main() -> Result<()> {
    let args = PlotArgs::parse();

    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("INFO")))
        .init();

    info!("Plotting CP2K benchmarks from {}...", args.file.display());
    PlotRunner::new(args).run().inspect_err(|e| error!("{e:#}"))?;
    info!("Finished plotting.");
    Ok(())
}
