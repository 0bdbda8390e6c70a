//! Scenario runner for the pip-drag engine
//!
//! Replays YAML gesture scenarios and prints one JSON record per step.
//!
//! Usage:
//!   pip-drag samples/scenarios/flick_dismiss.yaml
//!   pip-drag --dir samples/scenarios --pretty
//!   pip-drag --init-config

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use pip_drag::cli::{CliArgs, RunMode};
use pip_drag::scenario::{self, Scenario};
use pip_drag::PipConfig;

fn load_config(args: &CliArgs) -> Result<PipConfig> {
    match &args.config {
        Some(path) => PipConfig::load_from(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(PipConfig::load()),
    }
}

fn load_scenario(path: &Path) -> Result<Scenario> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading scenario {}", path.display()))?;
    Scenario::from_yaml_str(&content)
        .with_context(|| format!("parsing scenario {}", path.display()))
}

fn scenario_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        anyhow::bail!("scenarios directory does not exist: {}", dir.display());
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("reading scenarios dir {}", dir.display()))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.extension()
                .map(|ext| ext == "yaml" || ext == "yml")
                .unwrap_or(false)
        })
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("no scenario files found in {}", dir.display());
    }
    Ok(files)
}

fn init_config(args: &CliArgs) -> Result<()> {
    let config = PipConfig::default();
    let written = match &args.config {
        Some(path) => config.save_to(path),
        None => config.save(),
    };
    written.context("writing default config")
}

fn replay(files: Vec<PathBuf>, config: &PipConfig, pretty: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for path in files {
        let scenario = load_scenario(&path)?;
        let label = scenario
            .name
            .clone()
            .unwrap_or_else(|| path.display().to_string());
        tracing::info!(scenario = %label, steps = scenario.steps.len(), "replaying");

        let records = scenario::run(&scenario, config)
            .with_context(|| format!("scenario {}", label))?;

        for record in &records {
            let line = if pretty {
                serde_json::to_string_pretty(record)
            } else {
                serde_json::to_string(record)
            }
            .context("encoding step record")?;
            writeln!(out, "{}", line).context("writing output")?;
        }
        eprintln!("  {} ... ok ({} steps)", label, records.len());
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    pip_drag::tracing::init();

    let mode = args.run_mode().map_err(anyhow::Error::msg)?;
    match mode {
        RunMode::InitConfig => init_config(&args),
        RunMode::Replay(files) => replay(files, &load_config(&args)?, args.pretty),
        RunMode::Directory(dir) => {
            let files = scenario_files(&dir)?;
            replay(files, &load_config(&args)?, args.pretty)
        }
    }
}
