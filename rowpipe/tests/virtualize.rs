use rowpipe::{visible_range, Viewport, VisibleRange};

fn viewport(scroll_offset: u32, height: u32, row_height: u32, overscan: u32) -> Viewport {
    Viewport {
        scroll_offset,
        height,
        row_height,
        overscan,
    }
}

#[test]
fn test_window_at_top() {
    let range = visible_range(&viewport(0, 100, 20, 0), 50);
    assert_eq!(range, VisibleRange { start: 0, end: 5 });
}

#[test]
fn test_partial_rows_round_outward() {
    // Offset 30 with 20px rows: row 1 is half visible, row 6 peeks in.
    let range = visible_range(&viewport(30, 100, 20, 0), 50);
    assert_eq!(range, VisibleRange { start: 1, end: 7 });
}

#[test]
fn test_overscan_pads_both_sides() {
    let range = visible_range(&viewport(100, 100, 20, 3), 50);
    assert_eq!(range, VisibleRange { start: 2, end: 13 });
}

#[test]
fn test_overscan_clamps_at_start() {
    let range = visible_range(&viewport(0, 100, 20, 5), 50);
    assert_eq!(range.start, 0);
}

#[test]
fn test_window_clamps_at_end() {
    let range = visible_range(&viewport(900, 100, 20, 5), 50);
    assert_eq!(range.end, 50);
    assert!(range.start <= range.end);
}

#[test]
fn test_offset_beyond_content_yields_empty_window() {
    let range = visible_range(&viewport(10_000, 100, 20, 2), 10);
    assert_eq!(range.end, 10);
    assert!(range.start <= range.end);
}

#[test]
fn test_zero_rows() {
    let range = visible_range(&viewport(0, 100, 20, 3), 0);
    assert_eq!(range, VisibleRange { start: 0, end: 0 });
    assert!(range.is_empty());
}

#[test]
fn test_zero_row_height_treated_as_one() {
    let range = visible_range(&viewport(0, 10, 0, 0), 100);
    assert_eq!(range, VisibleRange { start: 0, end: 10 });
}

#[test]
fn test_containment_invariant_across_offsets() {
    let row_count = 200;
    for offset in (0..5000).step_by(37) {
        let vp = viewport(offset, 340, 24, 4);
        let range = visible_range(&vp, row_count);
        assert!(range.start <= range.end);
        assert!(range.end <= row_count);

        // Geometric coverage: every row overlapping the viewport is in
        // the window.
        let first_visible = (offset / 24) as usize;
        let last_visible = ((offset + 340).div_ceil(24) as usize).min(row_count);
        if first_visible < row_count {
            assert!(range.contains(first_visible), "offset {offset}");
        }
        if last_visible > first_visible && last_visible <= row_count {
            assert!(range.contains(last_visible - 1), "offset {offset}");
        }
    }
}

#[test]
fn test_each_invocation_is_independent() {
    let vp = viewport(480, 100, 20, 2);
    let a = visible_range(&vp, 50);
    let b = visible_range(&vp, 50);
    assert_eq!(a, b);
}
