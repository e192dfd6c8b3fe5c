use std::path::Path;

use areafilter_core::components::ComponentStats;
use areafilter_core::consts::{DEFAULT_NEIGHBORS8, DEFAULT_WRITE_PROPS};
use areafilter_core::filter::{FilterKind, FilterSpec};
use console::Style;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn on_off(flag: Option<bool>, default: bool) -> &'static str {
    if flag.unwrap_or(default) {
        "on"
    } else {
        "off"
    }
}

pub fn print_filter_header(spec: &FilterSpec, file_count: usize, output_dir: &Path) {
    let s = Styles::new();
    let args = &spec.args;

    println!();
    println!("  {}", s.title.apply_to(spec.kind.name()));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(spec.kind.name().len())));
    println!();

    let selection = match spec.kind {
        FilterKind::Area => args
            .min_area
            .map(|a| format!("area >= {a} px"))
            .unwrap_or_else(|| "unset".into()),
        FilterKind::Rel => args
            .percentage
            .map(|p| format!("largest covering {p}%"))
            .unwrap_or_else(|| "unset".into()),
    };
    println!("  {:<14}{}", s.label.apply_to("Keep"), s.method.apply_to(selection));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Neighbors8"),
        s.value.apply_to(on_off(args.neighbors8, DEFAULT_NEIGHBORS8))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Props"),
        s.value.apply_to(on_off(args.write_props, DEFAULT_WRITE_PROPS))
    );
    println!("  {:<14}{}", s.label.apply_to("Files"), s.value.apply_to(file_count));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output_dir.display())
    );
    println!();
}

/// Print the statistics of every plane of one file.
pub fn print_file_summary(
    input: &Path,
    output: Option<&Path>,
    props: Option<&Path>,
    stats: &[ComponentStats],
) {
    let s = Styles::new();

    println!("  {}", s.header.apply_to(input.display()));
    if let Some(output) = output {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Saved"),
            s.path.apply_to(output.display())
        );
        match props {
            Some(props) => println!(
                "    {:<12}{}",
                s.label.apply_to("Props"),
                s.path.apply_to(props.display())
            ),
            None => println!(
                "    {:<12}{}",
                s.label.apply_to("Props"),
                s.disabled.apply_to("not written")
            ),
        }
    }

    for (plane, plane_stats) in stats.iter().enumerate() {
        let label = format!("Plane {plane}");
        if plane_stats.is_empty() {
            println!(
                "    {:<12}{}",
                s.label.apply_to(label),
                s.disabled.apply_to("no components")
            );
            continue;
        }
        println!(
            "    {:<12}{} components, {} px",
            s.label.apply_to(label),
            s.value.apply_to(plane_stats.component_count),
            s.value.apply_to(plane_stats.total_area())
        );
        let quartiles = [0, 25, 50, 75, 100]
            .iter()
            .filter_map(|&p| plane_stats.size_percentile(p).map(|v| format!("p{p}={v}")))
            .collect::<Vec<_>>()
            .join("  ");
        println!("    {:<12}{}", "", s.method.apply_to(quartiles));
    }
    println!();
}
