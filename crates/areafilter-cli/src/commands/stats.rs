use std::path::PathBuf;

use anyhow::{Context, Result};
use areafilter_core::filter::{AreaFilter, FilterArgs, FilterKind};
use areafilter_core::io::image_io::load_frame;
use clap::Args;

use crate::summary::print_file_summary;

#[derive(Args)]
pub struct StatsArgs {
    /// Input mask images
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Use 8-connectivity instead of 4-connectivity
    #[arg(long)]
    pub neighbors8: bool,
}

/// Print per-plane component statistics. Nothing is written.
pub fn run(args: &StatsArgs) -> Result<()> {
    // A minimum area of one keeps every component, so only the stats matter.
    let filter_args = FilterArgs::area(1).with_neighbors8(args.neighbors8);

    for input in &args.inputs {
        let frame =
            load_frame(input).with_context(|| format!("Failed to load {}", input.display()))?;
        let filter = AreaFilter::new(FilterKind::Area, &frame.video_info(), &filter_args)
            .with_context(|| format!("Cannot analyze {}", input.display()))?;
        let filtered = filter.filter_frame(&frame)?;
        print_file_summary(input, None, None, &filtered.plane_stats);
    }
    Ok(())
}
