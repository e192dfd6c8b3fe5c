mod common;

use areafilter_core::components::stats::percentile_index;
use areafilter_core::components::{component_stats, label_plane, Connectivity, DisjointSet};
use areafilter_core::plane::{Plane, PlaneRef};

use common::{noise_plane, plane_from_rows, plane_u8};

fn stats_of(plane: &Plane<u8>, connectivity: Connectivity) -> areafilter_core::ComponentStats {
    let src = plane.as_plane_ref().unwrap();
    let mut labeling = label_plane(&src, 255, connectivity);
    component_stats(&mut labeling).0
}

// ---------------------------------------------------------------------------
// DisjointSet
// ---------------------------------------------------------------------------

#[test]
fn test_disjoint_set_starts_as_singletons() {
    let mut ds = DisjointSet::new(4);
    assert_eq!(ds.len(), 4);
    for i in 0..4 {
        assert_eq!(ds.find(i), i);
        assert_eq!(ds.size_of(i), 1);
    }
}

#[test]
fn test_disjoint_set_merge_is_transitive() {
    let mut ds = DisjointSet::new(6);
    ds.merge(0, 1);
    ds.merge(2, 3);
    assert!(!ds.same_class(0, 2));

    ds.merge(1, 3);
    assert!(ds.same_class(0, 2));
    assert_eq!(ds.size_of(0), 4);
    assert_eq!(ds.size_of(5), 1);
}

#[test]
fn test_disjoint_set_merge_within_class_is_noop() {
    let mut ds = DisjointSet::new(3);
    ds.merge(0, 1);
    ds.merge(1, 0);
    ds.merge(0, 1);
    assert_eq!(ds.size_of(1), 2);
    assert_eq!(ds.size_of(2), 1);
}

#[test]
fn test_disjoint_set_long_chain_resolves() {
    let mut ds = DisjointSet::new(1000);
    for i in 1..1000 {
        ds.merge(i - 1, i);
    }
    let root = ds.find(0);
    for i in 0..1000 {
        assert_eq!(ds.find(i), root);
    }
    assert_eq!(ds.size_of(999), 1000);
}

// ---------------------------------------------------------------------------
// Connectivity table
// ---------------------------------------------------------------------------

#[test]
fn test_connectivity_offset_counts() {
    assert_eq!(Connectivity::Four.offsets().len(), 4);
    assert_eq!(Connectivity::Eight.offsets().len(), 8);
    assert_eq!(Connectivity::Four.scan_offsets().len(), 2);
    assert_eq!(Connectivity::Eight.scan_offsets().len(), 4);
}

#[test]
fn test_scan_offsets_precede_pixel_in_raster_order() {
    for conn in [Connectivity::Four, Connectivity::Eight] {
        for off in conn.scan_offsets() {
            assert!(off.dy < 0 || (off.dy == 0 && off.dx < 0), "{off:?}");
            assert!(conn.offsets().contains(off));
        }
    }
}

#[test]
fn test_four_connectivity_has_no_diagonals() {
    for off in Connectivity::Four.offsets() {
        assert_eq!(off.dy.abs() + off.dx.abs(), 1);
    }
}

#[test]
fn test_connectivity_from_flag() {
    assert_eq!(Connectivity::from_neighbors8(true), Connectivity::Eight);
    assert_eq!(Connectivity::from_neighbors8(false), Connectivity::Four);
    assert_eq!(Connectivity::default(), Connectivity::Four);
}

// ---------------------------------------------------------------------------
// Labeling
// ---------------------------------------------------------------------------

#[test]
fn test_x_shape_depends_on_connectivity() {
    let plane = plane_u8(&[
        "#.#", //
        ".#.", //
        "#.#", //
    ]);

    let eight = stats_of(&plane, Connectivity::Eight);
    assert_eq!(eight.component_count, 1);
    assert_eq!(eight.component_sizes, vec![5]);

    let four = stats_of(&plane, Connectivity::Four);
    assert_eq!(four.component_count, 5);
    assert_eq!(four.component_sizes, vec![1; 5]);
}

#[test]
fn test_anti_diagonal_uses_upper_right_neighbor() {
    let plane = plane_u8(&[
        "..#", //
        ".#.", //
        "#..", //
    ]);
    assert_eq!(stats_of(&plane, Connectivity::Eight).component_count, 1);
    assert_eq!(stats_of(&plane, Connectivity::Four).component_count, 3);
}

#[test]
fn test_u_shape_labels_merge_at_bottom() {
    let plane = plane_u8(&[
        "#.#", //
        "#.#", //
        "###", //
    ]);
    let src = plane.as_plane_ref().unwrap();
    let mut labeling = label_plane(&src, 255, Connectivity::Four);

    // The two arms start with different provisional labels.
    assert_ne!(labeling.label_at(0, 0), labeling.label_at(2, 0));
    assert_eq!(labeling.max_label, 2);

    let (stats, _) = component_stats(&mut labeling);
    assert_eq!(stats.component_count, 1);
    assert_eq!(stats.component_sizes, vec![7]);
    assert_eq!(labeling.root_at(0, 0), labeling.root_at(2, 0));
    assert_eq!(labeling.root_at(1, 0), 0);
}

#[test]
fn test_comb_merges_every_tooth() {
    let plane = plane_u8(&[
        "#.#.#", //
        "#.#.#", //
        "#####", //
    ]);
    let stats = stats_of(&plane, Connectivity::Four);
    assert_eq!(stats.component_count, 1);
    assert_eq!(stats.component_sizes, vec![11]);
}

#[test]
fn test_label_plane_ignores_near_foreground_values() {
    let mut plane = plane_u8(&["##.##"]);
    plane.set(2, 0, 254);
    let stats = stats_of(&plane, Connectivity::Eight);
    assert_eq!(stats.component_count, 2);
}

#[test]
fn test_label_plane_float_samples() {
    let mut plane = plane_from_rows(&["###", "...", "###"], 1.0f32, 0.0f32);
    plane.set(1, 1, 0.999);
    let src = plane.as_plane_ref().unwrap();
    let mut labeling = label_plane(&src, 1.0f32, Connectivity::Eight);
    let (stats, _) = component_stats(&mut labeling);
    assert_eq!(stats.component_sizes, vec![3, 3]);
}

#[test]
fn test_label_plane_u16_samples() {
    let plane = plane_from_rows(&["#..#", "#..#"], 1023u16, 0u16);
    let src = plane.as_plane_ref().unwrap();
    let mut labeling = label_plane(&src, 1023u16, Connectivity::Four);
    let (stats, _) = component_stats(&mut labeling);
    assert_eq!(stats.component_sizes, vec![2, 2]);
}

#[test]
fn test_label_plane_skips_row_padding() {
    // Three visible columns, two padding bytes per row set to foreground.
    let data: Vec<u8> = vec![
        255, 0, 255, 255, 255, //
        255, 0, 255, 255, 255, //
    ];
    let src = PlaneRef::new(&data, 3, 2, 5).unwrap();
    let mut labeling = label_plane(&src, 255, Connectivity::Four);
    let (stats, _) = component_stats(&mut labeling);
    assert_eq!(stats.component_sizes, vec![2, 2]);
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

#[test]
fn test_stats_sizes_and_percentiles() {
    let plane = plane_u8(&[
        "#.##.###", //
        "........", //
        "####....", //
    ]);
    let stats = stats_of(&plane, Connectivity::Four);

    assert_eq!(stats.component_count, 4);
    assert_eq!(stats.component_sizes, vec![1, 2, 3, 4]);
    assert_eq!(stats.size_percentile(0), Some(1));
    assert_eq!(stats.size_percentile(15), Some(1));
    assert_eq!(stats.size_percentile(20), Some(2));
    assert_eq!(stats.size_percentile(45), Some(2));
    assert_eq!(stats.size_percentile(50), Some(3));
    assert_eq!(stats.size_percentile(80), Some(3));
    assert_eq!(stats.size_percentile(85), Some(4));
    assert_eq!(stats.size_percentile(100), Some(4));
    assert_eq!(stats.size_percentile(7), None);
    assert_eq!(stats.size_percentile(105), None);
}

#[test]
fn test_stats_empty_plane() {
    let plane = plane_u8(&["....", "...."]);
    let stats = stats_of(&plane, Connectivity::Eight);
    assert_eq!(stats.component_count, 0);
    assert!(stats.is_empty());
    assert!(stats.component_sizes.is_empty());
    assert_eq!(stats.size_percentiles, [0; 21]);
}

#[test]
fn test_stats_sizes_sum_to_foreground_count() {
    for seed in 1..6 {
        let plane = noise_plane(37, 23, 45, seed);
        let fg_count = plane.foreground_count(255);
        for conn in [Connectivity::Four, Connectivity::Eight] {
            let stats = stats_of(&plane, conn);
            assert_eq!(stats.total_area(), fg_count, "seed {seed}, {conn}");
            assert_eq!(stats.component_sizes.len(), stats.component_count);
        }
    }
}

#[test]
fn test_eight_connectivity_never_has_more_components() {
    for seed in 1..6 {
        let plane = noise_plane(40, 30, 50, seed);
        let four = stats_of(&plane, Connectivity::Four);
        let eight = stats_of(&plane, Connectivity::Eight);
        assert!(eight.component_count <= four.component_count);
    }
}

#[test]
fn test_percentiles_within_size_bounds() {
    for seed in 1..6 {
        let plane = noise_plane(32, 32, 40, seed);
        let stats = stats_of(&plane, Connectivity::Four);
        let min = *stats.component_sizes.first().unwrap();
        let max = *stats.component_sizes.last().unwrap();
        for &p in &stats.size_percentiles {
            assert!(p >= min && p <= max);
        }
        assert_eq!(stats.size_percentiles[0], min);
        assert_eq!(stats.size_percentiles[20], max);
        assert!(stats.size_percentiles.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn test_percentile_index_clamps_to_last() {
    assert_eq!(percentile_index(100, 7), 6);
    assert_eq!(percentile_index(0, 7), 0);
}
