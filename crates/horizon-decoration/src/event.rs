//! Pointer events delivered to decoration buttons.
//!
//! The host's windowing pipeline translates raw input into [`PointerEvent`]s
//! in decoration-local coordinates. A button that handles an event marks it
//! accepted; an event left unaccepted may be routed elsewhere (for example to
//! start a window move).

use crate::geometry::Point;

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left = 0,
    /// Secondary button (usually right).
    Right = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
    /// Additional button 1 (e.g., browser back).
    Button4 = 3,
    /// Additional button 2 (e.g., browser forward).
    Button5 = 4,
}

bitflags::bitflags! {
    /// A set of mouse buttons, e.g. the buttons a decoration button reacts to.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct MouseButtons: u8 {
        const LEFT = 1 << MouseButton::Left as u8;
        const RIGHT = 1 << MouseButton::Right as u8;
        const MIDDLE = 1 << MouseButton::Middle as u8;
        const BUTTON4 = 1 << MouseButton::Button4 as u8;
        const BUTTON5 = 1 << MouseButton::Button5 as u8;
    }
}

impl Default for MouseButtons {
    fn default() -> Self {
        Self::LEFT
    }
}

impl From<MouseButton> for MouseButtons {
    fn from(button: MouseButton) -> Self {
        Self::from_bits_retain(1 << button as u8)
    }
}

impl MouseButtons {
    /// Check whether `button` is part of this set.
    #[inline]
    pub fn contains_button(&self, button: MouseButton) -> bool {
        self.contains(button.into())
    }
}

/// Common data for all pointer events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl EventBase {
    /// Create a new, unaccepted event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }

    /// Set the accepted flag explicitly.
    pub fn set_accepted(&mut self, accepted: bool) {
        self.accepted = accepted;
    }
}

/// The kind of a [`PointerEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    /// The pointer entered the button.
    HoverEnter,
    /// The pointer left the button.
    HoverLeave,
    /// A mouse button went down.
    ButtonPress(MouseButton),
    /// A mouse button went up.
    ButtonRelease(MouseButton),
}

/// A pointer event in decoration-local coordinates.
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    /// Base event data.
    pub base: EventBase,
    /// What happened.
    pub kind: PointerEventKind,
    /// Pointer position in decoration-local coordinates.
    pub position: Point,
}

impl PointerEvent {
    /// Create a new, unaccepted pointer event.
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            base: EventBase::new(),
            kind,
            position,
        }
    }

    /// A hover-enter event at `position`.
    pub fn hover_enter(position: Point) -> Self {
        Self::new(PointerEventKind::HoverEnter, position)
    }

    /// A hover-leave event at `position`.
    pub fn hover_leave(position: Point) -> Self {
        Self::new(PointerEventKind::HoverLeave, position)
    }

    /// A press of `button` at `position`.
    pub fn press(position: Point, button: MouseButton) -> Self {
        Self::new(PointerEventKind::ButtonPress(button), position)
    }

    /// A release of `button` at `position`.
    pub fn release(position: Point, button: MouseButton) -> Self {
        Self::new(PointerEventKind::ButtonRelease(button), position)
    }

    /// The mouse button involved, if this is a press or release.
    pub fn button(&self) -> Option<MouseButton> {
        match self.kind {
            PointerEventKind::ButtonPress(button) | PointerEventKind::ButtonRelease(button) => {
                Some(button)
            }
            PointerEventKind::HoverEnter | PointerEventKind::HoverLeave => None,
        }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.base.is_accepted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_accepted_buttons_is_left() {
        assert_eq!(MouseButtons::default(), MouseButtons::LEFT);
    }

    #[test]
    fn test_mouse_buttons_from_button() {
        let set = MouseButtons::LEFT | MouseButtons::MIDDLE | MouseButtons::RIGHT;
        assert!(set.contains_button(MouseButton::Middle));
        assert!(!set.contains_button(MouseButton::Button4));
        assert_eq!(MouseButtons::from(MouseButton::Right), MouseButtons::RIGHT);
    }

    #[test]
    fn test_events_start_unaccepted() {
        let mut event = PointerEvent::press(Point::new(5.0, 5.0), MouseButton::Left);
        assert!(!event.is_accepted());
        assert_eq!(event.button(), Some(MouseButton::Left));
        event.base.accept();
        assert!(event.is_accepted());
        event.base.ignore();
        assert!(!event.is_accepted());
        assert_eq!(PointerEvent::hover_enter(Point::ZERO).button(), None);
    }
}
