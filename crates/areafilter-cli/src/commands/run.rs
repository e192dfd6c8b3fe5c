use std::path::PathBuf;

use anyhow::{Context, Result};
use areafilter_core::filter::FilterSpec;
use clap::Args;
use serde::{Deserialize, Serialize};

use super::filter::process_files;

/// A batch job: which images to filter, where to write them, and how.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunConfig {
    pub inputs: Vec<PathBuf>,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    pub filter: FilterSpec,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Args)]
pub struct RunArgs {
    /// TOML job file
    pub config: PathBuf,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let content = std::fs::read_to_string(&args.config)
        .with_context(|| format!("Failed to read {}", args.config.display()))?;
    let job: RunConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", args.config.display()))?;

    anyhow::ensure!(!job.inputs.is_empty(), "no inputs listed in {}", args.config.display());

    process_files(&job.filter, &job.inputs, &job.output_dir)
}
