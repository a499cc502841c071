use super::super::Action;
use super::KeyboardHotkey;
use egui::Key;

const fn ctrl(key: Key) -> KeyboardHotkey {
    KeyboardHotkey {
        ctrl: true,
        alt: false,
        shift: false,
        key,
    }
}

pub const KEYBOARD: &[(Action, &[KeyboardHotkey])] = &[
    (Action::Undo, &[ctrl(Key::Z)]),
    (Action::Reset, &[ctrl(Key::N)]),
    (Action::Save, &[ctrl(Key::S)]),
    (Action::BrushGrow, &[ctrl(Key::Equals), ctrl(Key::Plus)]),
    (Action::BrushShrink, &[ctrl(Key::Minus)]),
];
