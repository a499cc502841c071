//! Turns egui's per-frame pointer state into the discrete [`PointerEvent`]s the canvas consumes.
//!
//! egui reports the pointer as a snapshot each frame, while the canvas wants press, drag, release and
//! leave as separate events. A press only starts a stroke when it lands on the canvas, but once it has,
//! drags and the release are delivered even when the pointer wanders off it.

use scribble_core::PointerEvent;

/// The pointer as seen during one frame, in canvas-local coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointerFrame {
    /// `None` if the pointer has left the window.
    pub pos: Option<[f64; 2]>,
    /// The pointer is over the visible part of the canvas.
    pub inside: bool,
    /// Primary button went down this frame.
    pub pressed: bool,
    /// Primary button went up this frame.
    pub released: bool,
    /// Primary button is held.
    pub down: bool,
}
impl PointerFrame {
    /// Read the pointer relative to a canvas drawn at `canvas_rect`.
    ///
    /// `inside` should come from the canvas widget's response, so popups and panels covering the
    /// canvas count as outside.
    #[must_use]
    pub fn from_input(input: &egui::InputState, canvas_rect: egui::Rect, inside: bool) -> Self {
        let pointer = &input.pointer;
        Self {
            pos: pointer.latest_pos().map(|pos| {
                let local = pos - canvas_rect.min;
                [f64::from(local.x), f64::from(local.y)]
            }),
            inside,
            pressed: pointer.primary_pressed(),
            released: pointer.primary_released(),
            down: pointer.primary_down(),
        }
    }
}

#[derive(Default, Debug)]
pub struct PointerTracker {
    inside: bool,
    /// A press started on the canvas and hasn't been released.
    captured: bool,
    last: Option<[f64; 2]>,
}
impl PointerTracker {
    pub fn update(&mut self, frame: PointerFrame) -> smallvec::SmallVec<[PointerEvent; 4]> {
        let mut events = smallvec::SmallVec::new();
        let moved = frame.pos.is_some() && frame.pos != self.last;
        // Where to report events that happen with the pointer gone.
        let Some(pos) = frame.pos.or(self.last) else {
            self.inside = frame.inside;
            return events;
        };

        if frame.pressed && frame.inside {
            self.captured = true;
            events.push(PointerEvent::Down(pos));
        } else if self.captured && frame.down && moved {
            events.push(PointerEvent::Move(pos));
        }
        if self.inside && !frame.inside {
            events.push(PointerEvent::Leave(pos));
        }
        if frame.released && self.captured {
            self.captured = false;
            events.push(PointerEvent::Up(pos));
        }

        self.inside = frame.inside;
        if frame.pos.is_some() {
            self.last = frame.pos;
        }
        events
    }
}
