//! # Points and segments
//!
//! A drawing is a flat run of [`Point`]s. A point flagged as an end-marker terminates the
//! stroke it follows: it is never connected to the point after it.

use crate::brush::{BrushSettings, BrushSize};
use crate::color::Color;

/// A single sample of a stroke. Immutable once created.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Point {
    position: [f64; 2],
    color: Color,
    brush_size: BrushSize,
    /// Terminates the current stroke rather than continuing it.
    is_end: bool,
}
impl Point {
    #[must_use]
    pub fn new(position: [f64; 2], brush: &BrushSettings, is_end: bool) -> Self {
        Self {
            position,
            color: brush.color,
            brush_size: brush.size,
            is_end,
        }
    }
    #[must_use]
    pub fn position(&self) -> [f64; 2] {
        self.position
    }
    #[must_use]
    pub fn x(&self) -> f64 {
        self.position[0]
    }
    #[must_use]
    pub fn y(&self) -> f64 {
        self.position[1]
    }
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }
    #[must_use]
    pub fn brush_size(&self) -> BrushSize {
        self.brush_size
    }
    /// Is this sample a stroke terminator?
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.is_end
    }
}

/// A straight, round-capped line between two consecutive points.
///
/// Paint attributes come from the *later* of the two points.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Segment {
    pub from: [f64; 2],
    pub to: [f64; 2],
    pub color: Color,
    pub width: BrushSize,
}
impl Segment {
    /// Connect `prev` to `cur`, or `None` if `prev` ends a stroke.
    #[must_use]
    pub fn between(prev: &Point, cur: &Point) -> Option<Self> {
        (!prev.is_end()).then(|| Self {
            from: prev.position(),
            to: cur.position(),
            color: cur.color(),
            width: cur.brush_size(),
        })
    }
    /// Both ends coincide, so the segment draws as a single dot.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.from == self.to
    }
}

/// Iterator over the drawable segments of a point run, in drawing order.
#[derive(Clone)]
pub struct Segments<'a> {
    pairs: std::slice::Windows<'a, Point>,
}
impl<'a> Segments<'a> {
    #[must_use]
    pub fn new(points: &'a [Point]) -> Self {
        Self {
            pairs: points.windows(2),
        }
    }
}
impl Iterator for Segments<'_> {
    type Item = Segment;
    fn next(&mut self) -> Option<Self::Item> {
        // Skip pairs whose first point is an end-marker.
        self.pairs
            .by_ref()
            .find_map(|pair| Segment::between(&pair[0], &pair[1]))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.pairs.size_hint().1)
    }
}
