//! FWD CLI - headless front end for the dataset explorer.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "fwd-cli",
    version,
    about = "Filter a topic/indicator/geography/year dataset and export it as CSV"
)]
struct Cli {
    /// Dataset location: an http(s) URL or a local JSON file
    #[arg(short, long, global = true, default_value = fwd_cmd::DEFAULT_SOURCE)]
    source: String,

    #[command(subcommand)]
    command: fwd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    fwd_cmd::run(&cli.source, cli.command).await
}
