pub mod components;
pub mod consts;
pub mod error;
pub mod filter;
pub mod format;
pub mod frame;
pub mod io;
pub mod plane;
pub mod sample;

pub use components::{ComponentStats, Connectivity};
pub use error::{AreaFilterError, Result};
pub use filter::{filter_plane, AreaFilter, FilterArgs, FilterKind, SelectionPolicy};
pub use plane::{Plane, PlaneMut, PlaneRef};
