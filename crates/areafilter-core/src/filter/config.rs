use serde::{Deserialize, Serialize};

use crate::components::Connectivity;
use crate::consts::{DEFAULT_NEIGHBORS8, DEFAULT_WRITE_PROPS};
use crate::error::{AreaFilterError, Result};
use crate::format::{ForegroundValue, VideoFormat, VideoInfo};

use super::selection::SelectionPolicy;

/// The two filters: absolute area and relative coverage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterKind {
    #[default]
    Area,
    Rel,
}

impl FilterKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Area => "AreaFilter",
            Self::Rel => "RelFilter",
        }
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Raw, unvalidated filter parameters as supplied by the caller.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterArgs {
    /// Minimum component area in pixels (`AreaFilter`).
    pub min_area: Option<i64>,
    /// Foreground coverage to keep, in (0, 100] (`RelFilter`).
    pub percentage: Option<f64>,
    /// Use 8-connectivity instead of 4-connectivity.
    pub neighbors8: Option<bool>,
    /// Attach first-plane statistics to output frames.
    pub write_props: Option<bool>,
}

impl FilterArgs {
    pub fn area(min_area: i64) -> Self {
        Self {
            min_area: Some(min_area),
            ..Self::default()
        }
    }

    pub fn rel(percentage: f64) -> Self {
        Self {
            percentage: Some(percentage),
            ..Self::default()
        }
    }

    pub fn with_neighbors8(mut self, neighbors8: bool) -> Self {
        self.neighbors8 = Some(neighbors8);
        self
    }

    pub fn with_write_props(mut self, write_props: bool) -> Self {
        self.write_props = Some(write_props);
        self
    }
}

/// A filter and its arguments, as stored in a config file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub kind: FilterKind,
    #[serde(flatten)]
    pub args: FilterArgs,
}

/// Validated filter configuration, fixed for the lifetime of a filter.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterConfig {
    pub kind: FilterKind,
    pub format: VideoFormat,
    pub policy: SelectionPolicy,
    pub connectivity: Connectivity,
    pub write_props: bool,
    pub foreground: ForegroundValue,
}

fn config_error(kind: FilterKind, message: impl std::fmt::Display) -> AreaFilterError {
    AreaFilterError::Config(format!("{kind}: {message}"))
}

impl FilterConfig {
    /// Validate `args` against the stream described by `info`.
    ///
    /// Checks run in order: constant format, sample format, then the policy
    /// parameter of `kind`. The first failure is returned.
    pub fn from_args(kind: FilterKind, info: &VideoInfo, args: &FilterArgs) -> Result<Self> {
        let format = match info.format {
            Some(format) if info.is_constant_format() => format,
            _ => {
                return Err(config_error(
                    kind,
                    "only clips with constant format are accepted",
                ))
            }
        };

        let sample = format.sample;
        let foreground = sample.foreground_value().ok_or_else(|| {
            config_error(
                kind,
                format!(
                    "only 8-16 bit integer or 32 bit float input are accepted, got {} bit {}",
                    sample.bits_per_sample, sample.sample_type
                ),
            )
        })?;

        let policy = match kind {
            FilterKind::Area => absolute_policy(kind, args.min_area)?,
            FilterKind::Rel => percentage_policy(kind, args.percentage)?,
        };

        Ok(Self {
            kind,
            format,
            policy,
            connectivity: Connectivity::from_neighbors8(
                args.neighbors8.unwrap_or(DEFAULT_NEIGHBORS8),
            ),
            write_props: args.write_props.unwrap_or(DEFAULT_WRITE_PROPS),
            foreground,
        })
    }
}

fn absolute_policy(kind: FilterKind, min_area: Option<i64>) -> Result<SelectionPolicy> {
    let min_area = min_area.ok_or_else(|| config_error(kind, "min_area must be set"))?;
    if min_area <= 0 {
        return Err(config_error(
            kind,
            format!("min_area must be greater than 0, got {min_area}"),
        ));
    }
    let min_area = usize::try_from(min_area)
        .map_err(|_| config_error(kind, format!("min_area {min_area} is out of range")))?;
    Ok(SelectionPolicy::AbsoluteArea { min_area })
}

fn percentage_policy(kind: FilterKind, percentage: Option<f64>) -> Result<SelectionPolicy> {
    let percentage = percentage.ok_or_else(|| config_error(kind, "percentage must be set"))?;
    // Written so that NaN is rejected too.
    if !(percentage > 0.0 && percentage <= 100.0) {
        return Err(config_error(
            kind,
            format!("percentage must be in the range (0, 100], got {percentage}"),
        ));
    }
    Ok(SelectionPolicy::PercentageCoverage { percentage })
}
