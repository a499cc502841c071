//! # Stroke log
//!
//! The entire drawing history as a single append-only run of points, plus the canvas extent.
//! Stroke boundaries are encoded in-band with end-marker points rather than by nesting.

use std::sync::Arc;

use crate::brush::BrushSettings;
use crate::stroke::{Point, Segment, Segments};

/// Extent of a freshly created or cleared canvas, in pixels.
pub const DEFAULT_DIMENSIONS: [u32; 2] = [400, 400];

#[derive(Clone, Debug)]
pub struct StrokeLog {
    /// Insertion order is drawing order. Only ever appended, truncated from the tail, or emptied.
    points: Vec<Point>,
    dimensions: [u32; 2],
}
impl Default for StrokeLog {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            dimensions: DEFAULT_DIMENSIONS,
        }
    }
}
impl StrokeLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    pub fn append(&mut self, point: Point) {
        log::trace!(
            "append {:?} (end: {})",
            point.position(),
            point.is_end()
        );
        self.points.push(point);
    }
    /// Create and append a point with the given brush.
    pub fn append_at(&mut self, position: [f64; 2], brush: &BrushSettings, is_end: bool) {
        self.append(Point::new(position, brush, is_end));
    }
    /// Replace the canvas extent. Growth policy belongs to the caller.
    pub fn set_dimensions(&mut self, dimensions: [u32; 2]) {
        self.dimensions = dimensions;
    }
    #[must_use]
    pub fn dimensions(&self) -> [u32; 2] {
        self.dimensions
    }
    /// Read-only view of the history.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    /// Drop every point and restore [`DEFAULT_DIMENSIONS`].
    pub fn clear(&mut self) {
        self.points.clear();
        self.dimensions = DEFAULT_DIMENSIONS;
    }
    /// Remove the most recent stroke along with its trailing end-marker(s).
    ///
    /// Any run of end-markers at the tail is dropped first, so a release recorded twice
    /// (pointer leaving, then button released) still undoes as one stroke. The end-marker of
    /// the previous stroke is left in place.
    ///
    /// Returns the number of points removed, zero if the log was empty.
    pub fn undo_last_stroke(&mut self) -> usize {
        let before = self.points.len();

        while self.points.last().is_some_and(Point::is_end) {
            self.points.pop();
        }
        // The last drawable vertex, if any remain.
        if self.points.pop().is_some() {
            while self.points.last().is_some_and(|point| !point.is_end()) {
                self.points.pop();
            }
        }

        let removed = before - self.points.len();
        log::trace!("undo removed {removed} points, {} remain", self.points.len());
        removed
    }
    /// Take an immutable copy of the current history and extent.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            points: self.points.as_slice().into(),
            dimensions: self.dimensions,
        }
    }
}

/// Point-in-time copy of a [`StrokeLog`]. Cheap to clone and safe to share across threads.
#[derive(Clone, Debug)]
pub struct Snapshot {
    points: Arc<[Point]>,
    dimensions: [u32; 2],
}
impl Default for Snapshot {
    fn default() -> Self {
        StrokeLog::default().snapshot()
    }
}
impl Snapshot {
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    #[must_use]
    pub fn dimensions(&self) -> [u32; 2] {
        self.dimensions
    }
    #[must_use]
    pub fn width(&self) -> u32 {
        self.dimensions[0]
    }
    #[must_use]
    pub fn height(&self) -> u32 {
        self.dimensions[1]
    }
    /// Every drawable segment, in drawing order. Rendering and export both consume this.
    #[must_use]
    pub fn segments(&self) -> Segments<'_> {
        Segments::new(&self.points)
    }
    /// The segment joining the two most recent points, if there is one to draw.
    #[must_use]
    pub fn last_segment(&self) -> Option<Segment> {
        match &*self.points {
            [.., prev, cur] => Segment::between(prev, cur),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test;
