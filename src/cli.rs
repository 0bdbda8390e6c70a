//! Command-line argument parsing for the scenario runner
//!
//! Supports:
//! - Replaying one or more scenario files
//! - Replaying every scenario in a directory
//! - Overriding the configuration file

use clap::Parser;
use std::path::PathBuf;

/// Replay picture-in-picture gesture scenarios
#[derive(Parser, Debug)]
#[command(
    name = "pip-drag",
    version,
    about = "Replay picture-in-picture gesture scenarios"
)]
pub struct CliArgs {
    /// Scenario YAML files to replay
    #[arg(value_name = "SCENARIOS")]
    pub scenarios: Vec<PathBuf>,

    /// Replay every scenario in this directory
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Configuration file (defaults to ~/.config/pip-drag/config.yaml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Pretty-print each step record
    #[arg(long)]
    pub pretty: bool,

    /// Write the default configuration file and exit
    #[arg(long)]
    pub init_config: bool,
}

/// What the runner was asked to do
#[derive(Debug, Clone, PartialEq)]
pub enum RunMode {
    /// Replay these scenario files in order
    Replay(Vec<PathBuf>),
    /// Replay every `.yaml`/`.yml` file in a directory
    Directory(PathBuf),
    /// Write the default configuration
    InitConfig,
}

impl CliArgs {
    /// Resolve parsed arguments into a run mode
    pub fn run_mode(&self) -> Result<RunMode, String> {
        if self.init_config {
            return Ok(RunMode::InitConfig);
        }
        match (&self.dir, self.scenarios.is_empty()) {
            (Some(_), false) => Err("pass scenario files or --dir, not both".to_string()),
            (Some(dir), true) => Ok(RunMode::Directory(dir.clone())),
            (None, false) => Ok(RunMode::Replay(self.scenarios.clone())),
            (None, true) => Err("no scenarios given; pass files or --dir".to_string()),
        }
    }
}
