use super::*;

fn model(w: u32, h: u32, horizontal: &[(u32, u32)], vertical: &[(u32, u32)]) -> PatchModel {
    let ticks = |v: &[(u32, u32)]| v.iter().map(|&(s, e)| Tick::new(s, e)).collect();
    PatchModel::new(w, h)
        .with_horizontal_ticks(ticks(horizontal))
        .with_vertical_ticks(ticks(vertical))
}

fn assert_partitions_interior(grid: &ChunkGrid, w: u32, h: u32) {
    let mut covered = vec![0u8; (w * h) as usize];
    for (_, chunk) in grid.iter() {
        for y in chunk.rect.y..chunk.rect.bottom() {
            for x in chunk.rect.x..chunk.rect.right() {
                covered[(y * w + x) as usize] += 1;
            }
        }
    }
    assert!(covered.iter().all(|&c| c == 1));
}

#[test]
fn converted_72x50_gives_expected_3x3() {
    let grid = build_chunk_grid(&model(74, 52, &[(1, 70)], &[(1, 48)]));
    assert_eq!((grid.row_count(), grid.column_count()), (3, 3));

    let size = |r: usize, c: usize| {
        let rect = grid.get(r, c).unwrap().rect;
        (rect.width, rect.height)
    };
    for (r, c) in [(0, 0), (0, 2), (2, 0), (2, 2)] {
        assert_eq!(size(r, c), (1, 1));
        assert_eq!(grid.get(r, c).unwrap().stretch_axis, StretchAxis::None);
    }
    assert_eq!(size(0, 1), (70, 1));
    assert_eq!(size(2, 1), (70, 1));
    assert_eq!(size(1, 0), (1, 48));
    assert_eq!(size(1, 2), (1, 48));
    assert_eq!(size(1, 1), (70, 48));

    assert_eq!(grid.get(0, 1).unwrap().stretch_axis, StretchAxis::Horizontal);
    assert_eq!(grid.get(1, 0).unwrap().stretch_axis, StretchAxis::Vertical);
    assert_eq!(grid.get(1, 1).unwrap().stretch_axis, StretchAxis::Both);
    assert!(!corrupted_chunks(&grid).has_corruption());
}

#[test]
fn grid_shape_and_partition_for_many_ticks() {
    let m = model(32, 22, &[(2, 4), (8, 8), (12, 20)], &[(0, 3), (10, 12)]);
    let grid = build_chunk_grid(&m);
    assert_eq!(grid.row_count(), 5);
    assert_eq!(grid.column_count(), 7);
    assert_eq!((grid.interior_width(), grid.interior_height()), (30, 20));
    assert_partitions_interior(&grid, 30, 20);

    for row in grid.chunks() {
        assert_eq!(row.iter().map(|c| c.rect.width).sum::<u32>(), 30);
    }
    for col in 0..grid.column_count() {
        let h: u32 = (0..grid.row_count())
            .map(|r| grid.get(r, col).unwrap().rect.height)
            .sum();
        assert_eq!(h, 20);
    }
}

#[test]
fn segments_alternate_fixed_and_stretch() {
    let segs = axis_segments(&[Tick::new(2, 3), Tick::new(6, 6)], 10);
    let kinds: Vec<_> = segs.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SegmentKind::Fixed,
            SegmentKind::Stretch,
            SegmentKind::Fixed,
            SegmentKind::Stretch,
            SegmentKind::Fixed
        ]
    );
    let spans: Vec<_> = segs.iter().map(|s| (s.start, s.len)).collect();
    assert_eq!(spans, vec![(0, 2), (2, 2), (4, 2), (6, 1), (7, 3)]);
    assert!(segs.iter().all(|s| s.consistent));
}

#[test]
fn no_ticks_is_one_fixed_chunk() {
    let grid = build_chunk_grid(&PatchModel::new(10, 7));
    assert_eq!((grid.row_count(), grid.column_count()), (1, 1));
    let chunk = grid.get(0, 0).unwrap();
    assert_eq!(chunk.rect, IRect::new(0, 0, 8, 5));
    assert_eq!(chunk.stretch_axis, StretchAxis::None);
}

#[test]
fn tick_touching_border_leaves_empty_but_sound_cells() {
    let grid = corrupted_chunks(&build_chunk_grid(&model(12, 12, &[(0, 4)], &[])));
    assert_eq!(grid.get(0, 0).unwrap().rect.width, 0);
    assert!(!grid.has_corruption());

    let full = corrupted_chunks(&build_chunk_grid(&model(12, 12, &[(0, 9)], &[(0, 9)])));
    assert_eq!((full.row_count(), full.column_count()), (3, 3));
    assert_eq!(full.get(1, 1).unwrap().rect, IRect::new(0, 0, 10, 10));
    assert!(!full.has_corruption());
}

#[test]
fn adjacent_ticks_flag_the_empty_gap_between_them() {
    let segs = axis_segments(&[Tick::new(2, 4), Tick::new(5, 7)], 10);
    assert_eq!((segs[2].start, segs[2].len), (5, 0));
    assert!(!segs[2].consistent);
    assert!(segs.iter().enumerate().all(|(i, s)| i == 2 || s.consistent));

    let grid = corrupted_chunks(&build_chunk_grid(&model(12, 3, &[(2, 4), (5, 7)], &[])));
    assert_eq!(grid.corrupt_cells(), vec![CellIndex { row: 0, col: 2 }]);
}

#[test]
fn tiny_axes_from_conversion_are_sound() {
    for (w, h, tw, th) in [(3, 3, 1, 1), (4, 7, 2, 5), (12, 3, 10, 1)] {
        let m = model(w, h, &[(0, tw - 1)], &[(0, th - 1)]);
        assert!(!corrupted_chunks(&build_chunk_grid(&m)).has_corruption());
    }
}

#[test]
fn overlapping_ticks_are_clamped_and_flagged() {
    let m = model(22, 8, &[(5, 10), (8, 12)], &[]);
    let raw = build_chunk_grid(&m);
    assert_partitions_interior(&raw, 20, 6);

    let flagged = corrupted_chunks(&raw);
    let cols = flagged.columns();
    assert_eq!((cols[1].start, cols[1].len), (5, 6));
    assert!(cols[1].consistent);
    assert!(!cols[2].consistent);
    assert!(!cols[3].consistent);
    assert_eq!((cols[3].start, cols[3].len), (11, 2));
    assert!(flagged.get(0, 2).unwrap().corrupt);
    assert!(flagged.get(0, 3).unwrap().corrupt);
    assert!(!flagged.get(0, 1).unwrap().corrupt);
}

#[test]
fn flagging_never_moves_rects() {
    let m = model(10, 10, &[(6, 20)], &[(3, 1)]);
    let raw = build_chunk_grid(&m);
    let flagged = corrupted_chunks(&raw);
    for ((_, a), (_, b)) in raw.iter().zip(flagged.iter()) {
        assert_eq!(a.rect, b.rect);
        assert_eq!(a.stretch_axis, b.stretch_axis);
    }
    assert_partitions_interior(&flagged, 8, 8);
    assert!(flagged.has_corruption());
}

#[test]
fn stretch_axis_axis_queries() {
    assert!(StretchAxis::Both.stretches(Axis::Horizontal));
    assert!(StretchAxis::Both.stretches(Axis::Vertical));
    assert!(StretchAxis::Horizontal.stretches(Axis::Horizontal));
    assert!(!StretchAxis::Horizontal.stretches(Axis::Vertical));
    assert!(!StretchAxis::None.stretches(Axis::Vertical));
}
