//! Freehand stroke model for a small drawing canvas: the point log, its undo rules, and the
//! two views derived from it (raster rendering and SVG export).

pub mod brush;
pub mod canvas;
pub mod color;
pub mod render;
pub mod state;
pub mod stroke;
pub mod svg;

pub use brush::{BrushSettings, BrushSize};
pub use canvas::{Canvas, PointerEvent, Repaint, Response};
pub use color::Color;
pub use render::{Renderer, Surface};
pub use state::{Snapshot, StrokeLog};
pub use stroke::{Point, Segment};

#[cfg(test)]
mod test {
    use crate::{BrushSettings, BrushSize, Color, Renderer, Segment, StrokeLog, Surface};

    #[derive(Default)]
    struct Recorder(Vec<Segment>);
    impl Surface for Recorder {
        fn clear(&mut self, _: Color) {
            self.0.clear();
        }
        fn draw_segment(&mut self, segment: &Segment) {
            self.0.push(*segment);
        }
    }

    /// Pull `(x1, y1, x2, y2)` back out of each exported `<line>`.
    fn exported_lines(svg: &str) -> Vec<[f64; 4]> {
        svg.lines()
            .filter(|line| line.starts_with("<line"))
            .map(|line| {
                ["x1", "y1", "x2", "y2"].map(|attr| {
                    let start = line.find(&format!(" {attr}=\"")).unwrap() + attr.len() + 3;
                    let len = line[start..].find('"').unwrap();
                    line[start..start + len].parse().unwrap()
                })
            })
            .collect()
    }

    #[test]
    fn raster_and_vector_agree() {
        let thin = BrushSettings::default();
        let thick = BrushSettings {
            color: Color::rgb(0, 128, 255),
            size: BrushSize::new(8).unwrap(),
        };
        let mut log = StrokeLog::new();
        // Stray end-marker from hovering out before drawing anything.
        log.append_at([0.0, 0.0], &thin, true);
        for (i, brush) in [thin, thick, thin].iter().enumerate() {
            let base = i as f64 * 10.0;
            log.append_at([base, base], brush, false);
            log.append_at([base + 1.5, base], brush, false);
            log.append_at([base + 3.0, base + 0.25], brush, false);
            log.append_at([base + 3.0, base + 0.25], brush, true);
            if i == 1 {
                log.append_at([base + 3.0, base + 0.25], brush, true);
            }
        }
        // Unfinished trailing stroke.
        log.append_at([100.0, 100.0], &thick, false);
        log.append_at([120.0, 90.0], &thick, false);

        let snapshot = log.snapshot();
        let mut recorder = Recorder::default();
        Renderer::default().render_full(&mut recorder, &snapshot);
        let drawn: Vec<_> = recorder
            .0
            .iter()
            .map(|s| [s.from[0], s.from[1], s.to[0], s.to[1]])
            .collect();

        assert_eq!(drawn.len(), 3 * 3 + 1);
        assert_eq!(drawn, exported_lines(&crate::svg::export(&snapshot)));
    }
}
