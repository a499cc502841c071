//! # Canvas
//!
//! The controller between a windowing shell and the stroke log. Pointer events come in,
//! points go into the log, and a [`Response`] tells the shell what to repaint and whether the
//! canvas grew.

use crate::brush::{BrushSettings, BrushSize};
use crate::color::Color;
use crate::state::{Snapshot, StrokeLog};

/// A pointer event in canvas-local pixel coordinates.
#[derive(Copy, Clone, PartialEq, Debug, strum::AsRefStr)]
pub enum PointerEvent {
    /// Primary button pressed over the canvas.
    Down([f64; 2]),
    /// Pointer dragged with the primary button held. May be outside the canvas.
    Move([f64; 2]),
    /// Primary button released.
    Up([f64; 2]),
    /// Pointer left the canvas area, held or not.
    Leave([f64; 2]),
}
impl PointerEvent {
    #[must_use]
    pub fn position(&self) -> [f64; 2] {
        match self {
            Self::Down(pos) | Self::Move(pos) | Self::Up(pos) | Self::Leave(pos) => *pos,
        }
    }
}

/// How much of the raster is stale after an operation.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub enum Repaint {
    #[default]
    Nothing,
    /// Only the newest segment needs drawing on top of the existing raster.
    LastSegment,
    /// The raster must be rebuilt from the full history.
    Full,
}

/// What the shell must do after handing an operation to the [`Canvas`].
#[must_use = "the shell must repaint and re-layout as requested"]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Response {
    pub repaint: Repaint,
    /// The canvas extent changed to this size. The viewport should re-layout.
    pub resized: Option<[u32; 2]>,
}
impl Response {
    #[must_use]
    pub fn repaint(repaint: Repaint) -> Self {
        Self {
            repaint,
            resized: None,
        }
    }
    /// Combine two responses, keeping the stronger repaint and latest size.
    pub fn merge(self, other: Self) -> Self {
        Self {
            repaint: self.repaint.max(other.repaint),
            resized: other.resized.or(self.resized),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Canvas {
    log: StrokeLog,
    brush: BrushSettings,
    /// Between a press and the matching release or leave.
    drawing: bool,
}
impl Canvas {
    #[must_use]
    pub fn new(brush: BrushSettings) -> Self {
        Self {
            brush,
            ..Default::default()
        }
    }
    /// Apply a pointer event.
    pub fn handle(&mut self, event: PointerEvent) -> Response {
        log::trace!("pointer {} at {:?}", event.as_ref(), event.position());
        match event {
            PointerEvent::Down(pos) => self.pointer_down(pos),
            PointerEvent::Move(pos) => self.pointer_move(pos),
            PointerEvent::Up(pos) => self.pointer_up(pos),
            PointerEvent::Leave(pos) => self.pointer_leave(pos),
        }
    }
    /// Begin a new stroke.
    pub fn pointer_down(&mut self, pos: [f64; 2]) -> Response {
        self.drawing = true;
        self.log.append_at(pos, &self.brush, false);
        self.grow_to(pos).merge(Response::repaint(Repaint::LastSegment))
    }
    /// Continue the stroke, if one is in progress. The canvas grows either way.
    pub fn pointer_move(&mut self, pos: [f64; 2]) -> Response {
        let mut response = Response::default();
        if self.drawing {
            self.log.append_at(pos, &self.brush, false);
            response.repaint = Repaint::LastSegment;
        }
        response.merge(self.grow_to(pos))
    }
    /// End the stroke. Always logs an end-marker, even if the stroke was already ended.
    pub fn pointer_up(&mut self, pos: [f64; 2]) -> Response {
        self.end_stroke(pos)
    }
    /// End the stroke. Always logs an end-marker, even if no stroke was in progress.
    pub fn pointer_leave(&mut self, pos: [f64; 2]) -> Response {
        self.end_stroke(pos)
    }
    fn end_stroke(&mut self, pos: [f64; 2]) -> Response {
        self.drawing = false;
        self.log.append_at(pos, &self.brush, true);
        Response::repaint(Repaint::LastSegment)
    }
    /// Enlarge the extent to include `pos`, if it lies past the right or bottom edge.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn grow_to(&mut self, pos: [f64; 2]) -> Response {
        let old = self.log.dimensions();
        let mut new = old;
        for (extent, coord) in new.iter_mut().zip(pos) {
            if coord.is_finite() && coord > f64::from(*extent) {
                // Saturating float->int cast, absurd coordinates clamp to u32::MAX.
                *extent = coord.ceil() as u32;
            }
        }
        if new == old {
            return Response::default();
        }
        log::debug!("canvas grew from {old:?} to {new:?}");
        self.log.set_dimensions(new);
        Response {
            repaint: Repaint::Full,
            resized: Some(new),
        }
    }
    /// Remove the most recent stroke.
    pub fn undo(&mut self) -> Response {
        let removed = self.log.undo_last_stroke();
        log::debug!("undo removed {removed} points");
        if removed == 0 {
            Response::default()
        } else {
            Response::repaint(Repaint::Full)
        }
    }
    /// Erase everything and return to the default extent.
    pub fn clear(&mut self) -> Response {
        let old = self.log.dimensions();
        log::debug!("clearing {} points", self.log.len());
        self.log.clear();
        self.drawing = false;

        let new = self.log.dimensions();
        Response {
            repaint: Repaint::Full,
            resized: (old != new).then_some(new),
        }
    }
    /// Render the current drawing as an SVG document.
    #[must_use]
    pub fn export_svg(&self) -> String {
        crate::svg::export(&self.log.snapshot())
    }
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.log.snapshot()
    }
    #[must_use]
    pub fn dimensions(&self) -> [u32; 2] {
        self.log.dimensions()
    }
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }
    pub fn set_brush_color(&mut self, color: Color) {
        self.brush.color = color;
    }
    #[must_use]
    pub fn brush_color(&self) -> Color {
        self.brush.color
    }
    pub fn set_brush_size(&mut self, size: BrushSize) {
        self.brush.size = size;
    }
    #[must_use]
    pub fn brush_size(&self) -> BrushSize {
        self.brush.size
    }
}
