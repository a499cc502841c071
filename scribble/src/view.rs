//! Keeps the canvas raster and its GPU texture in step with the stroke log.

use scribble_core::{Renderer, Repaint, Snapshot};

pub struct CanvasView {
    renderer: Renderer,
    pixmap: Option<tiny_skia::Pixmap>,
    texture: Option<egui::TextureHandle>,
    /// The pixmap changed since the texture was last uploaded.
    dirty: bool,
}
impl CanvasView {
    #[must_use]
    pub fn new(renderer: Renderer) -> Self {
        Self {
            renderer,
            pixmap: None,
            texture: None,
            dirty: true,
        }
    }
    /// Bring the raster up to date after an operation asked for `repaint`.
    pub fn apply(&mut self, snapshot: &Snapshot, repaint: Repaint) {
        match repaint {
            Repaint::Nothing => (),
            Repaint::LastSegment => match &mut self.pixmap {
                Some(pixmap) if Self::fits(pixmap, snapshot) => {
                    if self.renderer.render_last_segment(pixmap, snapshot) {
                        self.dirty = true;
                    }
                }
                // Nothing to draw on top of, start over.
                _ => self.rebuild(snapshot),
            },
            Repaint::Full => self.rebuild(snapshot),
        }
    }
    fn fits(pixmap: &tiny_skia::Pixmap, snapshot: &Snapshot) -> bool {
        pixmap.width() == snapshot.width() && pixmap.height() == snapshot.height()
    }
    fn rebuild(&mut self, snapshot: &Snapshot) {
        match &mut self.pixmap {
            Some(pixmap) if Self::fits(pixmap, snapshot) => {
                self.renderer.render_full(pixmap, snapshot);
            }
            _ => {
                log::debug!("allocating {:?} canvas raster", snapshot.dimensions());
                self.pixmap = self.renderer.new_pixmap(snapshot);
            }
        }
        self.dirty = true;
    }
    #[must_use]
    pub fn pixmap(&self) -> Option<&tiny_skia::Pixmap> {
        self.pixmap.as_ref()
    }
    /// Upload the raster if it changed, and get the texture to paint it with.
    pub fn texture(&mut self, ctx: &egui::Context) -> Option<egui::TextureId> {
        let pixmap = self.pixmap.as_ref()?;
        if self.dirty || self.texture.is_none() {
            let image = egui::ColorImage::from_rgba_premultiplied(
                [pixmap.width() as usize, pixmap.height() as usize],
                pixmap.data(),
            );
            match &mut self.texture {
                Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
                None => {
                    self.texture =
                        Some(ctx.load_texture("canvas", image, egui::TextureOptions::NEAREST));
                }
            }
            self.dirty = false;
        }
        self.texture.as_ref().map(egui::TextureHandle::id)
    }
}
