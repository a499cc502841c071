//! The application window: a toolbar along the bottom and the scrollable canvas above it.

use crate::actions::{Action, KeyboardActionCollector};
use crate::global::Preferences;
use crate::input::{PointerFrame, PointerTracker};
use crate::view::CanvasView;
use scribble_core::{BrushSize, Canvas, Color, Renderer, Repaint, Response};

pub struct ScribbleApp {
    preferences: &'static Preferences,
    canvas: Canvas,
    view: CanvasView,
    pointer: PointerTracker,
    hotkeys: KeyboardActionCollector,
}
impl ScribbleApp {
    #[must_use]
    pub fn new(preferences: &'static Preferences) -> Self {
        let canvas = Canvas::new(preferences.file.brush);
        let mut view = CanvasView::new(Renderer::new(preferences.file.canvas.background));
        view.apply(&canvas.snapshot(), Repaint::Full);
        Self {
            preferences,
            canvas,
            view,
            pointer: PointerTracker::default(),
            hotkeys: KeyboardActionCollector::default(),
        }
    }
    /// Run an action, from a button or a hotkey.
    pub fn perform(&mut self, ctx: &egui::Context, action: Action) {
        log::debug!("performing {}", action.as_ref());
        match action {
            Action::Undo => {
                let response = self.canvas.undo();
                self.respond(ctx, response);
            }
            Action::Reset => {
                let response = self.canvas.clear();
                self.respond(ctx, response);
            }
            Action::Save => self.save(),
            Action::BrushGrow => self.canvas.set_brush_size(self.canvas.brush_size().grow()),
            Action::BrushShrink => self
                .canvas
                .set_brush_size(self.canvas.brush_size().shrink()),
        }
    }
    fn respond(&mut self, ctx: &egui::Context, response: Response) {
        if let Some(size) = response.resized {
            log::trace!("canvas is now {size:?}");
        }
        if response.repaint == Repaint::Nothing {
            return;
        }
        self.view.apply(&self.canvas.snapshot(), response.repaint);
        ctx.request_repaint();
    }
    /// Ask where to export, then write the SVG. Failures are reported in a dialog.
    fn save(&self) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Save drawing")
            .add_filter("SVG image", &["svg"])
            .set_file_name("drawing.svg")
            .save_file()
        else {
            log::debug!("save cancelled");
            return;
        };
        let path = crate::io::with_svg_extension(path);
        if let Err(e) = crate::io::save_svg(&path, &self.canvas.export_svg()) {
            log::error!("{e}: {}", e.source);
            let _ = rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Error)
                .set_title("IO Error")
                .set_description(format!("Could not save {}:\n{}", path.display(), e.source))
                .set_buttons(rfd::MessageButtons::Ok)
                .show();
        }
    }
    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Color");
            let brush_color = self.canvas.brush_color();
            let mut color = egui::Color32::from_rgb(brush_color.r, brush_color.g, brush_color.b);
            if egui::color_picker::color_edit_button_srgba(
                ui,
                &mut color,
                egui::color_picker::Alpha::Opaque,
            )
            .changed()
            {
                // Picker is opaque-only, keep whatever alpha the preferences gave.
                self.canvas.set_brush_color(Color::rgba(
                    color.r(),
                    color.g(),
                    color.b(),
                    brush_color.a,
                ));
            }

            ui.label("Size");
            let mut size = self.canvas.brush_size().get();
            egui::ComboBox::from_id_source("brush-size")
                .selected_text(size.to_string())
                .width(48.0)
                .show_ui(ui, |ui| {
                    for px in BrushSize::UI_RANGE {
                        ui.selectable_value(&mut size, px, px.to_string());
                    }
                });
            if let Some(size) = BrushSize::new(size) {
                self.canvas.set_brush_size(size);
            }

            ui.separator();
            let ctx = ui.ctx().clone();
            for (label, action) in [
                ("Undo", Action::Undo),
                ("Reset", Action::Reset),
                ("Save", Action::Save),
            ] {
                if ui.button(label).clicked() {
                    self.perform(&ctx, action);
                }
            }
        });
    }
    fn canvas_ui(&mut self, ui: &mut egui::Ui) {
        let [width, height] = self.canvas.dimensions();
        #[allow(clippy::cast_precision_loss)]
        let size = egui::vec2(width as f32, height as f32);
        let (rect, widget) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());

        let inside = widget.contains_pointer();
        let frame = ui.input(|input| PointerFrame::from_input(input, rect, inside));
        for event in self.pointer.update(frame) {
            let response = self.canvas.handle(event);
            self.respond(ui.ctx(), response);
        }
        widget.on_hover_cursor(egui::CursorIcon::Crosshair);

        let Some(texture) = self.view.texture(ui.ctx()) else {
            return;
        };
        // The raster may have grown this frame, paint it at its own size.
        let painted = self.view.pixmap().map_or(rect, |pixmap| {
            #[allow(clippy::cast_precision_loss)]
            let size = egui::vec2(pixmap.width() as f32, pixmap.height() as f32);
            egui::Rect::from_min_size(rect.min, size)
        });
        ui.painter().image(
            texture,
            painted,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    }
}

impl eframe::App for ScribbleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = ctx.input(|input| input.events.clone());
        for action in self
            .hotkeys
            .collect(&self.preferences.keys_to_actions, &events)
        {
            self.perform(ctx, action);
        }

        egui::TopBottomPanel::bottom("toolbar").show(ctx, |ui| self.toolbar(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both()
                .drag_to_scroll(false)
                .auto_shrink([false, false])
                .show(ui, |ui| self.canvas_ui(ui));
        });
    }
}
