pub mod connectivity;
pub mod disjoint_set;
pub mod labeling;
pub mod stats;

pub use connectivity::{Connectivity, NeighborOffset};
pub use disjoint_set::DisjointSet;
pub use labeling::{label_plane, Labeling};
pub use stats::{component_stats, ComponentSizes, ComponentStats};
