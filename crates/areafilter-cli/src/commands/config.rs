use std::path::PathBuf;

use anyhow::{Context, Result};
use areafilter_core::filter::{FilterArgs, FilterKind, FilterSpec};
use clap::Args;

use super::run::RunConfig;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save a default job file as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let config = RunConfig {
        inputs: vec![PathBuf::from("mask.png")],
        output_dir: PathBuf::from("filtered"),
        filter: FilterSpec {
            kind: FilterKind::Area,
            args: FilterArgs::area(16)
                .with_neighbors8(false)
                .with_write_props(true),
        },
    };
    let toml_str = toml::to_string_pretty(&config)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Default config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
