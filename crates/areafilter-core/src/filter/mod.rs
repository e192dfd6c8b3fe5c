pub mod config;
pub mod driver;
pub mod process;
pub mod selection;

pub use config::{FilterArgs, FilterConfig, FilterKind, FilterSpec};
pub use driver::{size_percentile_key, write_stats_props, AreaFilter, FilteredFrame};
pub use process::filter_plane;
pub use selection::{area_to_keep, percentage_threshold, SelectionPolicy};
