/// Number of size percentiles reported per plane (0, 5, ..., 100).
pub const PERCENTILE_COUNT: usize = 21;

/// Distance in percentage points between consecutive reported percentiles.
pub const PERCENTILE_STEP: usize = 5;

/// Extra disjoint-set slots beyond `width * height`. Label 0 is reserved for
/// background and labels are 1-based.
pub const LABEL_SLACK: usize = 2;

/// Minimum frame count to use frame-level Rayon parallelism.
pub const PARALLEL_FRAME_THRESHOLD: usize = 2;

/// Frame property holding the first plane's component count.
pub const COMPONENT_COUNT_KEY: &str = "ComponentCount";

/// Prefix of the per-percentile frame properties (`SizePercentile0` .. `SizePercentile100`).
pub const SIZE_PERCENTILE_KEY_PREFIX: &str = "SizePercentile";

/// Foreground value for float planes.
pub const FLOAT_FOREGROUND: f32 = 1.0;

/// Default value of the `neighbors8` parameter.
pub const DEFAULT_NEIGHBORS8: bool = false;

/// Default value of the `write_props` parameter.
pub const DEFAULT_WRITE_PROPS: bool = true;
