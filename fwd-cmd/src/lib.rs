//! Command implementations for the dataset explorer CLI.
//!
//! Every subcommand loads the dataset, builds the same `Explorer` the
//! browser widget uses, applies the requested filters and reports on the
//! result.

use clap::{Args, Subcommand};
use fwd_data::export::CSV_FILE_NAME;

pub mod explore;
pub mod source;

/// Dataset used when `--source` is not given.
pub const DEFAULT_SOURCE: &str =
    "https://raw.githubusercontent.com/danghenry/dataprojects/refs/heads/main/sample_app_data.json";

/// Selector values. Anything left out keeps the explorer's initial choice.
#[derive(Args, Debug, Clone, Default)]
pub struct Filters {
    /// Topic (resets the indicator to the topic's first indicator)
    #[arg(long)]
    pub topic: Option<String>,

    /// Indicator within the topic
    #[arg(long)]
    pub indicator: Option<String>,

    /// Geography
    #[arg(long)]
    pub geography: Option<String>,

    /// Year, or "All"
    #[arg(long)]
    pub year: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the values each selector offers
    Options {
        #[command(flatten)]
        filters: Filters,
    },

    /// Print the filtered records as a Year / Value / Unit table
    Show {
        #[command(flatten)]
        filters: Filters,
    },

    /// Write the filtered records as CSV
    Export {
        #[command(flatten)]
        filters: Filters,

        /// Output path
        #[arg(short, long, default_value = CSV_FILE_NAME)]
        output: String,
    },
}

pub async fn run(source: &str, command: Command) -> anyhow::Result<()> {
    let dataset = source::load(source).await?;
    match command {
        Command::Options { filters } => {
            let explorer = explore::explorer_with(dataset, &filters)?;
            print!("{}", explore::options_report(&explorer));
            Ok(())
        }
        Command::Show { filters } => {
            let explorer = explore::explorer_with(dataset, &filters)?;
            print!("{}", explore::table_report(&explorer));
            Ok(())
        }
        Command::Export { filters, output } => {
            let explorer = explore::explorer_with(dataset, &filters)?;
            explore::export_to(&explorer, &output)
        }
    }
}
