// File: crates/highlow-service/src/cli.rs
// Summary: Command-line surface of the `highlow` binary.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about = "Intraday bid/ask chart generator")]
pub struct Cli {
    /// Optional YAML file layered over the built-in defaults
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write one SVG per currency code without rasterizing or publishing
    Render {
        /// Quote feed JSON file, or `-` for stdin
        #[arg(long)]
        feed: String,

        /// Output directory for `{CODE}.svg`
        #[arg(long, default_value = "target/out")]
        out: PathBuf,

        /// Currency code to render; repeatable. Defaults to the configured batch
        #[arg(long = "code")]
        codes: Vec<String>,

        /// Draw the Sell/Buy legend
        #[arg(long)]
        legend: bool,
    },

    /// Render, rasterize and publish the configured batch, then print the JSON report
    Publish {
        /// Quote feed JSON file, or `-` for stdin
        #[arg(long)]
        feed: String,

        /// Generation date used for object keys and expiry (defaults to today, UTC)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}
