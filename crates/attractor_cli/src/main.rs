//! Command-line driver: integrate a configured attractor and hand the
//! finished trajectory to an output sink (PNG render or JSON export).

mod export;
mod render;

use anyhow::{bail, Context, Result};
use attractor_core::config::RunConfig;
use attractor_core::integrate;
use render::RenderOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// On-disk configuration: the run description plus optional figure styling.
#[derive(Debug, Clone, Deserialize)]
struct CliConfig {
    #[serde(flatten)]
    run: RunConfig,
    #[serde(default)]
    render: RenderOptions,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() > 2 {
        bail!("Usage: attractor [CONFIG.json] [OUTPUT.png|OUTPUT.json]");
    }

    let config = match args.first() {
        Some(path) => load_config(Path::new(path))?,
        None => CliConfig {
            run: RunConfig::lorenz(),
            render: RenderOptions::default(),
        },
    };
    let output = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("attractor.png"));

    let trajectory = integrate::run(&config.run)?;
    info!(states = trajectory.len(), "integration finished");

    match output.extension().and_then(|e| e.to_str()) {
        Some("json") => export::write_json(&trajectory, &output)?,
        _ => render::render_png(&trajectory, &config.render, &output)?,
    }
    info!(output = %output.display(), "wrote trajectory");
    Ok(())
}

fn load_config(path: &Path) -> Result<CliConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    Ok(config)
}
