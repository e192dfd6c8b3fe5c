use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use areafilter_core::components::ComponentStats;
use areafilter_core::filter::{AreaFilter, FilterArgs, FilterKind, FilterSpec};
use areafilter_core::io::image_io::load_frame;
use areafilter_core::io::props_io::save_frame_with_props;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::debug;

use crate::summary::{print_file_summary, print_filter_header};

#[derive(Args)]
pub struct CommonArgs {
    /// Input mask images
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Use 8-connectivity instead of 4-connectivity
    #[arg(long)]
    pub neighbors8: bool,

    /// Do not record component statistics
    #[arg(long)]
    pub no_props: bool,

    /// Directory for filtered images
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Args)]
pub struct AreaArgs {
    /// Minimum component area in pixels
    #[arg(long)]
    pub min_area: i64,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args)]
pub struct RelArgs {
    /// Share of the foreground to keep, in (0, 100]
    #[arg(long)]
    pub percentage: f64,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl CommonArgs {
    fn apply(&self, args: FilterArgs) -> FilterArgs {
        args.with_neighbors8(self.neighbors8)
            .with_write_props(!self.no_props)
    }
}

pub fn run_area(args: &AreaArgs) -> Result<()> {
    let spec = FilterSpec {
        kind: FilterKind::Area,
        args: args.common.apply(FilterArgs::area(args.min_area)),
    };
    process_files(&spec, &args.common.inputs, &args.common.output_dir)
}

pub fn run_rel(args: &RelArgs) -> Result<()> {
    let spec = FilterSpec {
        kind: FilterKind::Rel,
        args: args.common.apply(FilterArgs::rel(args.percentage)),
    };
    process_files(&spec, &args.common.inputs, &args.common.output_dir)
}

/// Output path for `input`: `<output_dir>/<stem>_filtered.<ext>`.
pub fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".into());
    let ext = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "png".into());
    output_dir.join(format!("{stem}_filtered.{ext}"))
}

/// Filter every input image and write the results to `output_dir`.
pub fn process_files(spec: &FilterSpec, inputs: &[PathBuf], output_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    print_filter_header(spec, inputs.len(), output_dir);

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Filtering");

    let results: Vec<FileResult> = inputs
        .par_iter()
        .map(|input| {
            let result = filter_file(spec, input, &output_path(input, output_dir))?;
            pb.inc(1);
            Ok(result)
        })
        .collect::<Result<_>>()?;
    pb.finish_and_clear();

    for (input, result) in inputs.iter().zip(&results) {
        print_file_summary(
            input,
            Some(result.output.as_path()),
            result.props.as_deref(),
            &result.stats,
        );
    }
    Ok(())
}

struct FileResult {
    output: PathBuf,
    /// Props sidecar, absent when props are disabled.
    props: Option<PathBuf>,
    stats: Vec<ComponentStats>,
}

fn filter_file(spec: &FilterSpec, input: &Path, output: &Path) -> Result<FileResult> {
    let frame =
        load_frame(input).with_context(|| format!("Failed to load {}", input.display()))?;
    let filter = AreaFilter::new(spec.kind, &frame.video_info(), &spec.args)
        .with_context(|| format!("Cannot filter {}", input.display()))?;
    let filtered = filter.filter_frame(&frame)?;
    debug!(
        input = %input.display(),
        output = %output.display(),
        props = filtered.frame.props.len(),
        "Filtered frame"
    );
    let props = save_frame_with_props(&filtered.frame, output)
        .with_context(|| format!("Failed to save {}", output.display()))?;
    Ok(FileResult {
        output: output.to_path_buf(),
        props,
        stats: filtered.plane_stats,
    })
}
