//! # Raster rendering
//!
//! Draws a [`Snapshot`] onto a [`Surface`]. Only the snapshot's segments are drawn, so the
//! raster always agrees with the exported document.

use crate::color::Color;
use crate::state::Snapshot;
use crate::stroke::Segment;

/// Something segments can be drawn onto.
pub trait Surface {
    /// Fill the entire surface with `background`.
    fn clear(&mut self, background: Color);
    /// Draw a round-capped, round-joined line with the segment's color and width.
    fn draw_segment(&mut self, segment: &Segment);
}

#[derive(Copy, Clone, Debug)]
pub struct Renderer {
    pub background: Color,
}
impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
        }
    }
}
impl Renderer {
    #[must_use]
    pub fn new(background: Color) -> Self {
        Self { background }
    }
    /// Repaint the whole history from scratch.
    pub fn render_full(&self, surface: &mut impl Surface, snapshot: &Snapshot) {
        surface.clear(self.background);
        for segment in snapshot.segments() {
            surface.draw_segment(&segment);
        }
    }
    /// Draw only the segment ending at the newest point, on top of what is already there.
    ///
    /// Returns false if there was nothing to draw.
    pub fn render_last_segment(&self, surface: &mut impl Surface, snapshot: &Snapshot) -> bool {
        if let Some(segment) = snapshot.last_segment() {
            surface.draw_segment(&segment);
            true
        } else {
            false
        }
    }
    /// Allocate a pixmap covering the snapshot's extent, painted with the full history.
    ///
    /// `None` if either dimension is zero.
    #[must_use]
    pub fn new_pixmap(&self, snapshot: &Snapshot) -> Option<tiny_skia::Pixmap> {
        let mut pixmap = tiny_skia::Pixmap::new(snapshot.width(), snapshot.height())?;
        self.render_full(&mut pixmap, snapshot);
        Some(pixmap)
    }
}

impl Surface for tiny_skia::Pixmap {
    fn clear(&mut self, background: Color) {
        self.fill(background.into());
    }
    #[allow(clippy::cast_possible_truncation)]
    fn draw_segment(&mut self, segment: &Segment) {
        let mut paint = tiny_skia::Paint::default();
        let Color { r, g, b, a } = segment.color;
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;

        let [x0, y0] = segment.from.map(|v| v as f32);
        let [x1, y1] = segment.to.map(|v| v as f32);

        if segment.is_degenerate() {
            // Zero-length strokes have no direction to cap, draw the cap shape directly.
            let Some(dot) = tiny_skia::PathBuilder::from_circle(x0, y0, segment.width.px() / 2.0)
            else {
                return;
            };
            self.fill_path(
                &dot,
                &paint,
                tiny_skia::FillRule::Winding,
                tiny_skia::Transform::identity(),
                None,
            );
            return;
        }

        let mut builder = tiny_skia::PathBuilder::new();
        builder.move_to(x0, y0);
        builder.line_to(x1, y1);
        let Some(line) = builder.finish() else {
            log::trace!("skipping unrepresentable segment {segment:?}");
            return;
        };
        let stroke = tiny_skia::Stroke {
            width: segment.width.px(),
            line_cap: tiny_skia::LineCap::Round,
            line_join: tiny_skia::LineJoin::Round,
            ..Default::default()
        };
        self.stroke_path(
            &line,
            &paint,
            &stroke,
            tiny_skia::Transform::identity(),
            None,
        );
    }
}
