//! # Actions
//!
//! Commands the user can trigger from the toolbar or from a hotkey. Both paths end up in
//! [`crate::app::ScribbleApp::perform`].

pub mod hotkeys;

#[derive(
    serde::Serialize,
    serde::Deserialize,
    Hash,
    PartialEq,
    Eq,
    strum::AsRefStr,
    strum::EnumIter,
    Clone,
    Copy,
    Debug,
)]
pub enum Action {
    /// Remove the most recent stroke.
    Undo,
    /// Erase the canvas and restore its default size.
    Reset,
    /// Export the drawing to an SVG file.
    Save,
    BrushGrow,
    BrushShrink,
}

/// Collects actions for the current frame from egui key events.
#[derive(Default)]
pub struct KeyboardActionCollector {
    /// Which hotkeys are held, to ignore OS key-repeat.
    held: hashbrown::HashSet<egui::Key>,
}
impl KeyboardActionCollector {
    /// Translate this frame's key presses into actions, in the order they were pressed.
    pub fn collect(
        &mut self,
        keys: &hotkeys::KeysToActions,
        events: &[egui::Event],
    ) -> smallvec::SmallVec<[Action; 2]> {
        let mut actions = smallvec::SmallVec::new();
        for event in events {
            let egui::Event::Key {
                key,
                pressed,
                modifiers,
                ..
            } = event
            else {
                continue;
            };
            if !*pressed {
                self.held.remove(key);
                continue;
            }
            // Already held, this is a repeat.
            if !self.held.insert(*key) {
                continue;
            }
            let Some(action) = keys.resolve(*key, modifiers.ctrl, modifiers.alt, modifiers.shift)
            else {
                continue;
            };
            log::trace!("hotkey triggered {}", action.as_ref());
            actions.push(action);
        }
        actions
    }
}
