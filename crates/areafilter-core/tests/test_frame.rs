mod common;

use areafilter_core::consts::COMPONENT_COUNT_KEY;
use areafilter_core::filter::{size_percentile_key, AreaFilter, FilterArgs, FilterKind};
use areafilter_core::format::{SampleFormat, VideoFormat, VideoInfo};
use areafilter_core::frame::{Frame, PlaneData};
use areafilter_core::plane::Plane;
use areafilter_core::AreaFilterError;

use common::{block_and_dot, noise_plane, plane_from_rows, plane_u8, render};

fn gray8_frame(plane: Plane<u8>) -> Frame {
    Frame::new(
        VideoFormat::gray(SampleFormat::integer(8)),
        vec![PlaneData::U8(plane)],
    )
    .unwrap()
}

fn area_filter(frame: &Frame, args: FilterArgs) -> AreaFilter {
    AreaFilter::new(FilterKind::Area, &frame.video_info(), &args).unwrap()
}

fn u8_plane(frame: &Frame, index: usize) -> &Plane<u8> {
    match frame.plane(index) {
        Some(PlaneData::U8(p)) => p,
        other => panic!("expected u8 plane, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn test_filter_frame_writes_props() {
    let frame = gray8_frame(block_and_dot());
    let filter = area_filter(&frame, FilterArgs::area(3));
    let out = filter.filter_frame(&frame).unwrap();

    let props = &out.frame.props;
    assert_eq!(props.get(COMPONENT_COUNT_KEY), Some(&2));
    assert_eq!(props.get("SizePercentile0"), Some(&1));
    assert_eq!(props.get("SizePercentile100"), Some(&4));
    assert_eq!(props.len(), 22);
    for p in (0..=100).step_by(5) {
        assert!(props.contains_key(&size_percentile_key(p)), "missing {p}");
    }
}

#[test]
fn test_filter_frame_without_props() {
    let mut frame = gray8_frame(block_and_dot());
    frame.props.insert("Keep".into(), 7);
    let filter = area_filter(&frame, FilterArgs::area(3).with_write_props(false));
    let out = filter.filter_frame(&frame).unwrap();
    assert_eq!(out.frame.props.len(), 1);
    assert_eq!(out.frame.props.get("Keep"), Some(&7));
    // Stats are still returned to the caller.
    assert_eq!(out.plane_stats[0].component_count, 2);
}

#[test]
fn test_filter_frame_replaces_existing_props() {
    let mut frame = gray8_frame(block_and_dot());
    frame.props.insert(COMPONENT_COUNT_KEY.into(), 99);
    frame.props.insert("Other".into(), 1);
    let filter = area_filter(&frame, FilterArgs::area(3));
    let out = filter.filter_frame(&frame).unwrap();
    assert_eq!(out.frame.props.get(COMPONENT_COUNT_KEY), Some(&2));
    assert_eq!(out.frame.props.get("Other"), Some(&1));
}

#[test]
fn test_props_come_from_first_plane_only() {
    let first = plane_u8(&["#...", "....", "..##", "..##"]);
    let second = plane_u8(&["#.#.", "....", "#.#.", "...."]);
    let third = plane_u8(&["....", "....", "....", "...."]);
    let frame = Frame::new(
        VideoFormat::rgb(SampleFormat::integer(8)),
        vec![
            PlaneData::U8(first),
            PlaneData::U8(second),
            PlaneData::U8(third),
        ],
    )
    .unwrap();
    let filter = area_filter(&frame, FilterArgs::area(2));
    let out = filter.filter_frame(&frame).unwrap();

    assert_eq!(out.plane_stats.len(), 3);
    assert_eq!(out.plane_stats[1].component_count, 4);
    assert_eq!(out.plane_stats[2].component_count, 0);
    assert_eq!(out.frame.props.get(COMPONENT_COUNT_KEY), Some(&2));

    assert_eq!(render(u8_plane(&out.frame, 0), 255), vec!["....", "....", "..##", "..##"]);
    assert_eq!(u8_plane(&out.frame, 1).foreground_count(255), 0);
}

// ---------------------------------------------------------------------------
// Formats
// ---------------------------------------------------------------------------

#[test]
fn test_rel_filter_on_float_frame() {
    let plane = plane_from_rows(&["##..", "##..", "....", "...#"], 1.0f32, 0.0);
    let frame = Frame::new(
        VideoFormat::gray(SampleFormat::float32()),
        vec![PlaneData::F32(plane)],
    )
    .unwrap();
    let filter =
        AreaFilter::new(FilterKind::Rel, &frame.video_info(), &FilterArgs::rel(50.0)).unwrap();
    let out = filter.filter_frame(&frame).unwrap();
    match out.frame.plane(0) {
        Some(PlaneData::F32(p)) => {
            assert_eq!(render(p, 1.0), vec!["##..", "##..", "....", "...."]);
        }
        other => panic!("expected f32 plane, got {other:?}"),
    }
}

#[test]
fn test_ten_bit_frame_uses_max_code_value() {
    let mut frame_plane = plane_from_rows(&["###.", "...#"], 1023u16, 0);
    frame_plane.set(3, 0, 1022);
    let frame = Frame::new(
        VideoFormat::gray(SampleFormat::integer(10)),
        vec![PlaneData::U16(frame_plane)],
    )
    .unwrap();
    let filter = area_filter(&frame, FilterArgs::area(2).with_neighbors8(true));
    let out = filter.filter_frame(&frame).unwrap();
    match out.frame.plane(0) {
        Some(PlaneData::U16(p)) => {
            // The three-pixel run and the diagonal pixel form one component.
            assert_eq!(render(p, 1023), vec!["###.", "...#"]);
            assert_eq!(p.get(3, 0), 0);
        }
        other => panic!("expected u16 plane, got {other:?}"),
    }
}

#[test]
fn test_subsampled_planes_are_filtered_independently() {
    let format = VideoFormat::yuv(SampleFormat::integer(8), 1, 1);
    let luma = noise_plane(8, 6, 50, 4);
    let chroma = plane_u8(&["#..#", "....", "##.."]);
    let frame = Frame::new(
        format,
        vec![
            PlaneData::U8(luma),
            PlaneData::U8(chroma.clone()),
            PlaneData::U8(chroma),
        ],
    )
    .unwrap();
    let filter = area_filter(&frame, FilterArgs::area(2));
    let out = filter.filter_frame(&frame).unwrap();
    assert_eq!(render(u8_plane(&out.frame, 1), 255), vec!["....", "....", "##.."]);
    assert_eq!(out.plane_stats[1], out.plane_stats[2]);
}

#[test]
fn test_frame_rejects_wrong_plane_dimensions() {
    let format = VideoFormat::yuv(SampleFormat::integer(8), 1, 1);
    let err = Frame::new(
        format,
        vec![
            PlaneData::U8(Plane::zeroed(8, 6)),
            PlaneData::U8(Plane::zeroed(8, 6)),
            PlaneData::U8(Plane::zeroed(4, 3)),
        ],
    )
    .unwrap_err();
    assert!(matches!(err, AreaFilterError::FormatMismatch(_)), "{err}");
}

#[test]
fn test_frame_rejects_wrong_storage() {
    let err = Frame::new(
        VideoFormat::gray(SampleFormat::integer(12)),
        vec![PlaneData::U8(Plane::zeroed(2, 2))],
    )
    .unwrap_err();
    assert!(matches!(err, AreaFilterError::FormatMismatch(_)), "{err}");
}

#[test]
fn test_filter_rejects_frame_of_other_format() {
    let frame = gray8_frame(block_and_dot());
    let info = VideoInfo::constant(VideoFormat::gray(SampleFormat::integer(16)), 4, 4);
    let filter = AreaFilter::new(FilterKind::Area, &info, &FilterArgs::area(1)).unwrap();
    let err = filter.filter_frame(&frame).unwrap_err();
    assert!(matches!(err, AreaFilterError::FormatMismatch(_)), "{err}");
}

#[test]
fn test_filter_construction_error_surfaces() {
    let err = AreaFilter::new(FilterKind::Area, &VideoInfo::variable(), &FilterArgs::area(1))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "AreaFilter: only clips with constant format are accepted"
    );
}

// ---------------------------------------------------------------------------
// Batches
// ---------------------------------------------------------------------------

#[test]
fn test_filter_frames_preserves_order() {
    let frames: Vec<Frame> = (1..=8)
        .map(|seed| gray8_frame(noise_plane(24, 16, 45, seed)))
        .collect();
    let filter = area_filter(&frames[0], FilterArgs::area(3));

    let batch = filter.filter_frames(&frames).unwrap();
    assert_eq!(batch.len(), frames.len());
    for (frame, filtered) in frames.iter().zip(&batch) {
        let single = filter.filter_frame(frame).unwrap();
        assert_eq!(single.frame, filtered.frame);
        assert_eq!(single.plane_stats, filtered.plane_stats);
    }
}

#[test]
fn test_filter_frames_empty_batch() {
    let frame = gray8_frame(block_and_dot());
    let filter = area_filter(&frame, FilterArgs::area(3));
    assert!(filter.filter_frames(&[]).unwrap().is_empty());
}

#[test]
fn test_source_frame_untouched() {
    let frame = gray8_frame(block_and_dot());
    let before = frame.clone();
    let filter = area_filter(&frame, FilterArgs::area(100));
    let _ = filter.filter_frame(&frame).unwrap();
    assert_eq!(frame, before);
}
