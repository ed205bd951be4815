use amala::{Config, Pipeline};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "amala", version, about = "Amala: daily logs to dataset, chart and report pages")]
struct Cli {
    /// Base directory for the logs, the template and every output.
    #[arg(long, default_value = ".")]
    workdir: PathBuf,

    /// Config file (defaults to <workdir>/amala.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log at DEBUG instead of INFO. RUST_LOG takes precedence.
    #[arg(long)]
    debug: bool,

    /// Print the run summary as JSON on stdout.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let config = Config::load(&cli.workdir, cli.config.as_deref())?;
    tracing::info!(workdir = %cli.workdir.display(), version = %config.report.version, "amala started");

    let summary = Pipeline::new(config, &cli.workdir).run(chrono::Local::now().naive_local())?;

    if cli.json {
        let json = serde_json::to_string_pretty(&summary).context("encoding run summary")?;
        println!("{json}");
    }
    Ok(())
}
