//! Abstract input events
//!
//! Events are plain values. Copying an event with a new source or shifted
//! coordinates produces a new value; nothing here depends on identity.

use crate::component::ComponentId;
use crate::domain::value_objects::{ModifierMask, Point};

use super::listener_set::ListenerCategory;

/// Key character of events that do not map to a Unicode character
pub const CHAR_UNDEFINED: char = '\u{FFFF}';

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyEventKind {
    Pressed,
    Released,
    /// Character input; no listener category handles it
    Typed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    Pressed,
    Released,
    /// Click notification; no listener category handles it
    Clicked,
    Entered,
    Exited,
    Moved,
    Dragged,
    /// Carried inside a [`MouseWheelEvent`]
    Wheel,
}

/// Where on the keyboard a key is located
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum KeyLocation {
    #[default]
    Unknown,
    Standard,
    Left,
    Right,
    Numpad,
}

impl KeyLocation {
    /// Convert from an AWT key location code
    pub fn from_awt(code: u32) -> Self {
        match code {
            1 => KeyLocation::Standard,
            2 => KeyLocation::Left,
            3 => KeyLocation::Right,
            4 => KeyLocation::Numpad,
            _ => KeyLocation::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeyEvent {
    pub source: Option<ComponentId>,
    pub kind: KeyEventKind,
    /// Milliseconds, as delivered by the native toolkit
    pub time: u64,
    pub modifiers: ModifierMask,
    pub key_code: u32,
    pub key_location: KeyLocation,
    pub key_char: char,
}

impl KeyEvent {
    pub fn new(kind: KeyEventKind, key_code: u32) -> Self {
        Self {
            source: None,
            kind,
            time: 0,
            modifiers: ModifierMask::NONE,
            key_code,
            key_location: KeyLocation::Standard,
            key_char: CHAR_UNDEFINED,
        }
    }

    pub fn with_source(&self, source: ComponentId) -> Self {
        Self {
            source: Some(source),
            ..self.clone()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MouseEvent {
    pub source: Option<ComponentId>,
    pub kind: MouseEventKind,
    pub time: u64,
    pub modifiers: ModifierMask,
    /// 0 when no button changed state, otherwise 1-3
    pub button: u32,
    pub click_count: u32,
    pub popup_trigger: bool,
    pub x: i32,
    pub y: i32,
}

impl MouseEvent {
    pub fn new(kind: MouseEventKind, x: i32, y: i32) -> Self {
        Self {
            source: None,
            kind,
            time: 0,
            modifiers: ModifierMask::NONE,
            button: 0,
            click_count: 0,
            popup_trigger: false,
            x,
            y,
        }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn with_source(&self, source: ComponentId) -> Self {
        Self {
            source: Some(source),
            ..self.clone()
        }
    }

    /// Copy of this event with its coordinates shifted
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }
}

/// Wheel rotation on top of a mouse event
///
/// Positive rotation scrolls towards the user (down), matching Swing.
#[derive(Clone, Debug, PartialEq)]
pub struct MouseWheelEvent {
    pub mouse: MouseEvent,
    pub wheel_rotation: i32,
    pub precise_wheel_rotation: f64,
}

impl MouseWheelEvent {
    pub fn new(mouse: MouseEvent, wheel_rotation: i32) -> Self {
        Self {
            mouse,
            wheel_rotation,
            precise_wheel_rotation: f64::from(wheel_rotation),
        }
    }

    pub fn with_source(&self, source: ComponentId) -> Self {
        Self {
            mouse: self.mouse.with_source(source),
            ..self.clone()
        }
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            mouse: self.mouse.translated(dx, dy),
            ..self.clone()
        }
    }
}

/// Any abstract input event
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    MouseWheel(MouseWheelEvent),
}

impl InputEvent {
    /// Listener category this event is routed to
    ///
    /// Wheel events are their own category even though they carry a mouse event.
    pub fn category(&self) -> ListenerCategory {
        match self {
            InputEvent::Key(_) => ListenerCategory::Key,
            InputEvent::Mouse(_) => ListenerCategory::Mouse,
            InputEvent::MouseWheel(_) => ListenerCategory::MouseWheel,
        }
    }

    pub fn source(&self) -> Option<ComponentId> {
        match self {
            InputEvent::Key(e) => e.source,
            InputEvent::Mouse(e) => e.source,
            InputEvent::MouseWheel(e) => e.mouse.source,
        }
    }

    pub fn modifiers(&self) -> ModifierMask {
        match self {
            InputEvent::Key(e) => e.modifiers,
            InputEvent::Mouse(e) => e.modifiers,
            InputEvent::MouseWheel(e) => e.mouse.modifiers,
        }
    }

    pub fn time(&self) -> u64 {
        match self {
            InputEvent::Key(e) => e.time,
            InputEvent::Mouse(e) => e.time,
            InputEvent::MouseWheel(e) => e.mouse.time,
        }
    }

    /// Whether some listener handler exists for this event's kind
    pub fn is_dispatchable(&self) -> bool {
        match self {
            InputEvent::Key(e) => e.kind != KeyEventKind::Typed,
            InputEvent::Mouse(e) => !matches!(e.kind, MouseEventKind::Clicked | MouseEventKind::Wheel),
            InputEvent::MouseWheel(_) => true,
        }
    }

    pub fn with_source(&self, source: ComponentId) -> Self {
        match self {
            InputEvent::Key(e) => InputEvent::Key(e.with_source(source)),
            InputEvent::Mouse(e) => InputEvent::Mouse(e.with_source(source)),
            InputEvent::MouseWheel(e) => InputEvent::MouseWheel(e.with_source(source)),
        }
    }

    /// Shift mouse coordinates; key events are returned unchanged
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        match self {
            InputEvent::Key(e) => InputEvent::Key(e.clone()),
            InputEvent::Mouse(e) => InputEvent::Mouse(e.translated(dx, dy)),
            InputEvent::MouseWheel(e) => InputEvent::MouseWheel(e.translated(dx, dy)),
        }
    }
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        InputEvent::Key(event)
    }
}

impl From<MouseEvent> for InputEvent {
    fn from(event: MouseEvent) -> Self {
        InputEvent::Mouse(event)
    }
}

impl From<MouseWheelEvent> for InputEvent {
    fn from(event: MouseWheelEvent) -> Self {
        InputEvent::MouseWheel(event)
    }
}
