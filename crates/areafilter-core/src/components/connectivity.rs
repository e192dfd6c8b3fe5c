use serde::{Deserialize, Serialize};

/// Relative position of a neighboring pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeighborOffset {
    pub dy: isize,
    pub dx: isize,
}

const fn offset(dy: isize, dx: isize) -> NeighborOffset {
    NeighborOffset { dy, dx }
}

#[rustfmt::skip]
const EIGHT_NEIGHBORS: [NeighborOffset; 8] = [
    offset(-1, -1), offset(-1, 0), offset(-1, 1),
    offset( 0, -1),                offset( 0, 1),
    offset( 1, -1), offset( 1, 0), offset( 1, 1),
];

#[rustfmt::skip]
const FOUR_NEIGHBORS: [NeighborOffset; 4] = [
                    offset(-1, 0),
    offset(0, -1),                 offset(0, 1),
                    offset( 1, 0),
];

// Neighbors that precede a pixel in raster order. These are the only ones
// that can carry a label when the pixel is visited.
#[rustfmt::skip]
const EIGHT_NEIGHBORS_SCAN: [NeighborOffset; 4] = [
    offset(-1, -1), offset(-1, 0), offset(-1, 1),
    offset( 0, -1),
];

#[rustfmt::skip]
const FOUR_NEIGHBORS_SCAN: [NeighborOffset; 2] = [
                    offset(-1, 0),
    offset(0, -1),
];

/// Which neighbors of a pixel count as connected to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connectivity {
    /// Up, down, left and right.
    #[default]
    Four,
    /// All eight surrounding pixels.
    Eight,
}

impl Connectivity {
    pub fn from_neighbors8(neighbors8: bool) -> Self {
        if neighbors8 {
            Self::Eight
        } else {
            Self::Four
        }
    }

    /// Full neighborhood in row-major order.
    pub fn offsets(self) -> &'static [NeighborOffset] {
        match self {
            Self::Four => &FOUR_NEIGHBORS,
            Self::Eight => &EIGHT_NEIGHBORS,
        }
    }

    /// Neighbors already visited by a top-to-bottom, left-to-right scan.
    pub fn scan_offsets(self) -> &'static [NeighborOffset] {
        match self {
            Self::Four => &FOUR_NEIGHBORS_SCAN,
            Self::Eight => &EIGHT_NEIGHBORS_SCAN,
        }
    }
}

impl std::fmt::Display for Connectivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Four => write!(f, "4-connected"),
            Self::Eight => write!(f, "8-connected"),
        }
    }
}
