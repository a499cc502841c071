use super::{StrokeLog, DEFAULT_DIMENSIONS};
use crate::brush::{BrushSettings, BrushSize};
use crate::color::Color;

fn black(size: u32) -> BrushSettings {
    BrushSettings {
        color: Color::BLACK,
        size: BrushSize::new(size).unwrap(),
    }
}
/// Log `xs` as drawable points along y = 0, then an end-marker at the last x.
fn stroke(log: &mut StrokeLog, xs: &[f64]) {
    let brush = black(1);
    for &x in xs {
        log.append_at([x, 0.0], &brush, false);
    }
    if let Some(&last) = xs.last() {
        log.append_at([last, 0.0], &brush, true);
    }
}
fn xs(log: &StrokeLog) -> Vec<(f64, bool)> {
    log.points().iter().map(|p| (p.x(), p.is_end())).collect()
}

#[test]
fn single_stroke_undoes_to_empty() {
    let mut log = StrokeLog::new();
    stroke(&mut log, &[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(log.len(), 5);

    assert_eq!(log.undo_last_stroke(), 5);
    assert!(log.is_empty());
}
#[test]
fn undo_keeps_prior_strokes() {
    let mut log = StrokeLog::new();
    stroke(&mut log, &[1.0, 2.0]);
    let first = xs(&log);
    stroke(&mut log, &[10.0, 11.0, 12.0]);

    assert_eq!(log.undo_last_stroke(), 4);
    // First stroke, end-marker included, is untouched.
    assert_eq!(xs(&log), first);
}
#[test]
fn undo_on_empty_is_noop() {
    let mut log = StrokeLog::new();
    assert_eq!(log.undo_last_stroke(), 0);
    assert_eq!(log.undo_last_stroke(), 0);
    assert!(log.is_empty());
    assert_eq!(log.dimensions(), DEFAULT_DIMENSIONS);
}
#[test]
fn doubled_end_markers_collapse() {
    let mut log = StrokeLog::new();
    stroke(&mut log, &[1.0, 2.0]);
    let first = xs(&log);

    stroke(&mut log, &[5.0, 6.0]);
    // Pointer left the canvas, then the button was released.
    log.append_at([6.0, 0.0], &black(1), true);

    assert_eq!(log.undo_last_stroke(), 4);
    assert_eq!(xs(&log), first);
}
#[test]
fn incomplete_stroke_removed_whole() {
    let mut log = StrokeLog::new();
    let brush = black(1);
    log.append_at([1.0, 0.0], &brush, false);
    log.append_at([2.0, 0.0], &brush, false);
    log.append_at([3.0, 0.0], &brush, false);

    assert_eq!(log.undo_last_stroke(), 3);
    assert!(log.is_empty());
}
#[test]
fn lone_end_markers_undo_to_empty() {
    let mut log = StrokeLog::new();
    let brush = black(1);
    // Hovering out of the canvas without drawing still logs end-markers.
    log.append_at([0.0, 0.0], &brush, true);
    log.append_at([0.0, 0.0], &brush, true);

    assert_eq!(log.undo_last_stroke(), 2);
    assert!(log.is_empty());
}
#[test]
fn repeated_undo_walks_back_one_stroke_at_a_time() {
    let mut log = StrokeLog::new();
    stroke(&mut log, &[1.0]);
    stroke(&mut log, &[2.0, 3.0]);
    stroke(&mut log, &[4.0, 5.0, 6.0]);

    assert_eq!(log.undo_last_stroke(), 4);
    assert_eq!(log.undo_last_stroke(), 3);
    assert_eq!(log.undo_last_stroke(), 2);
    assert_eq!(log.undo_last_stroke(), 0);
}
#[test]
fn clear_resets_dimensions() {
    let mut log = StrokeLog::new();
    stroke(&mut log, &[450.0, 600.0]);
    log.set_dimensions([600, 420]);

    log.clear();
    assert!(log.is_empty());
    assert_eq!(log.dimensions(), [400, 400]);
}
#[test]
fn snapshot_is_detached() {
    let mut log = StrokeLog::new();
    stroke(&mut log, &[1.0, 2.0]);
    let snapshot = log.snapshot();

    stroke(&mut log, &[3.0, 4.0]);
    log.set_dimensions([800, 800]);

    assert_eq!(snapshot.points().len(), 3);
    assert_eq!(snapshot.dimensions(), [400, 400]);
    assert_eq!(log.len(), 6);
}
#[test]
fn last_segment_respects_end_markers() {
    let mut log = StrokeLog::new();
    let brush = black(2);
    assert_eq!(log.snapshot().last_segment(), None);

    log.append_at([1.0, 1.0], &brush, false);
    assert_eq!(log.snapshot().last_segment(), None);

    log.append_at([2.0, 1.0], &brush, false);
    let segment = log.snapshot().last_segment().unwrap();
    assert_eq!((segment.from, segment.to), ([1.0, 1.0], [2.0, 1.0]));

    // Segment into the end-marker is drawn...
    log.append_at([2.0, 1.0], &brush, true);
    assert!(log.snapshot().last_segment().is_some());
    // ...but nothing leaves it.
    log.append_at([9.0, 9.0], &brush, false);
    assert_eq!(log.snapshot().last_segment(), None);
}
