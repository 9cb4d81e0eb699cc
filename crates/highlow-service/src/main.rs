// File: crates/highlow-service/src/main.rs
// Summary: `highlow` binary: loads config, installs logging and dispatches the render/publish commands.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use highlow_core::{build_scene, Feed, RenderOptions};
use highlow_service::cli::{Cli, Commands};
use highlow_service::logging::init_logger;
use highlow_service::{Config, Pipeline};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    init_logger(&config.logging).context("installing log subscriber")?;

    match cli.command {
        Commands::Render { feed, out, codes, legend } => {
            let feed = read_feed(&feed)?;
            let codes = if codes.is_empty() { config.batch.codes.clone() } else { codes };
            let opts = RenderOptions { legend: legend || config.batch.legend, ..RenderOptions::default() };
            render_svgs(&feed, &codes, &opts, &out)
        }
        Commands::Publish { feed, date } => {
            let feed = Arc::new(read_feed(&feed)?);
            let generated_on = date.unwrap_or_else(|| chrono::Utc::now().date_naive());
            let pipeline = Pipeline::from_config(&config).context("building publish pipeline")?;
            let report = pipeline.run(feed, &config.batch.codes, generated_on).await;
            println!("{}", serde_json::to_string_pretty(&report.to_json().context("encoding batch report")?)?);
            if !report.is_success() {
                warn!(failed = report.failures().count(), "batch finished with failures");
            }
            Ok(())
        }
    }
}

fn read_feed(source: &str) -> Result<Feed> {
    let bytes = if source == "-" {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf).context("reading feed from stdin")?;
        buf
    } else {
        std::fs::read(source).with_context(|| format!("reading feed {source}"))?
    };
    let feed = Feed::from_slice(&bytes).context("decoding feed")?;
    info!(quotes = feed.len(), "feed loaded");
    Ok(feed)
}

fn render_svgs(feed: &Feed, codes: &[String], opts: &RenderOptions, out: &Path) -> Result<()> {
    std::fs::create_dir_all(out).with_context(|| format!("creating {}", out.display()))?;
    for code in codes {
        match build_scene(feed, code, opts) {
            Ok(scene) => {
                let path = out.join(format!("{code}.svg"));
                std::fs::write(&path, scene.to_svg()).with_context(|| format!("writing {}", path.display()))?;
                info!(%code, path = %path.display(), "svg written");
            }
            Err(e) => warn!(%code, kind = e.kind(), error = %e, "chart skipped"),
        }
    }
    Ok(())
}
