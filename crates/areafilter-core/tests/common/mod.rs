#![allow(dead_code)]

use areafilter_core::plane::Plane;

/// Build an 8-bit plane from ASCII rows: `#` is foreground (255), anything
/// else is background (0).
pub fn plane_u8(rows: &[&str]) -> Plane<u8> {
    plane_from_rows(rows, 255u8, 0u8)
}

/// Same as [`plane_u8`] with explicit foreground and background samples.
pub fn plane_from_rows<T: areafilter_core::sample::Sample>(rows: &[&str], fg: T, bg: T) -> Plane<T> {
    let height = rows.len();
    let width = rows[0].len();
    let mut plane = Plane::zeroed(width, height);
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), width, "ragged row {y}");
        for (x, c) in row.chars().enumerate() {
            plane.set(x, y, if c == '#' { fg } else { bg });
        }
    }
    plane
}

/// Render a plane back to ASCII rows, `#` where the sample equals `fg`.
pub fn render<T: areafilter_core::sample::Sample>(plane: &Plane<T>, fg: T) -> Vec<String> {
    (0..plane.height())
        .map(|y| {
            (0..plane.width())
                .map(|x| if plane.get(x, y) == fg { '#' } else { '.' })
                .collect()
        })
        .collect()
}

/// 4x4 plane with a 2x2 block in the top-left corner and one isolated
/// pixel in the bottom-right corner.
pub fn block_and_dot() -> Plane<u8> {
    plane_u8(&[
        "##..", //
        "##..", //
        "....", //
        "...#", //
    ])
}

/// Deterministic pseudo-random mask (xorshift) with roughly `density` percent
/// foreground.
pub fn noise_plane(width: usize, height: usize, density: u32, seed: u64) -> Plane<u8> {
    let mut state = seed.max(1);
    let mut plane = Plane::zeroed(width, height);
    for y in 0..height {
        for x in 0..width {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            if (state % 100) < density as u64 {
                plane.set(x, y, 255);
            }
        }
    }
    plane
}
