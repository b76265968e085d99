//! Native events of both toolkits
//!
//! A native event is a tagged variant over the two toolkit event models. Each
//! variant is turned into an abstract event by exactly one translation
//! function in [`forwarder`](super::forwarder).

/// An event as delivered by one of the native toolkits
#[derive(Clone, Debug, PartialEq)]
pub enum NativeEvent {
    Swing(SwingEvent),
    Swt(SwtEvent),
}

impl NativeEvent {
    /// Copy of the event with mouse coordinates shifted; key events are unchanged
    pub fn translated(&self, dx: i32, dy: i32) -> NativeEvent {
        match self {
            NativeEvent::Swing(e) => NativeEvent::Swing(e.translated(dx, dy)),
            NativeEvent::Swt(e) => NativeEvent::Swt(e.translated(dx, dy)),
        }
    }

    pub fn is_mouse_event(&self) -> bool {
        match self {
            NativeEvent::Swing(e) => !matches!(e, SwingEvent::Key(_)),
            NativeEvent::Swt(e) => !matches!(e, SwtEvent::KeyDown(_) | SwtEvent::KeyUp(_)),
        }
    }
}

// Swing-style model

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwingKeyId {
    Pressed,
    Released,
    Typed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwingMouseId {
    Pressed,
    Released,
    Clicked,
    Entered,
    Exited,
    Moved,
    Dragged,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwingKeyEvent {
    pub id: SwingKeyId,
    pub when: i64,
    /// Extended modifier mask, already in abstract bit layout
    pub modifiers_ex: u32,
    pub key_code: u32,
    /// AWT key location code (0-4)
    pub key_location: u32,
    pub key_char: char,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwingMouseEvent {
    pub id: SwingMouseId,
    pub when: i64,
    pub modifiers_ex: u32,
    pub button: u32,
    pub click_count: u32,
    pub popup_trigger: bool,
    pub x: i32,
    pub y: i32,
}

impl SwingMouseEvent {
    pub fn new(id: SwingMouseId, x: i32, y: i32) -> Self {
        Self {
            id,
            when: 0,
            modifiers_ex: 0,
            button: 0,
            click_count: 0,
            popup_trigger: false,
            x,
            y,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwingWheelEvent {
    pub mouse: SwingMouseEvent,
    pub wheel_rotation: i32,
    pub precise_wheel_rotation: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SwingEvent {
    Key(SwingKeyEvent),
    Mouse(SwingMouseEvent),
    MouseWheel(SwingWheelEvent),
}

impl SwingEvent {
    pub fn translated(&self, dx: i32, dy: i32) -> SwingEvent {
        match self {
            SwingEvent::Key(e) => SwingEvent::Key(e.clone()),
            SwingEvent::Mouse(e) => SwingEvent::Mouse(SwingMouseEvent {
                x: e.x + dx,
                y: e.y + dy,
                ..e.clone()
            }),
            SwingEvent::MouseWheel(e) => SwingEvent::MouseWheel(SwingWheelEvent {
                mouse: SwingMouseEvent {
                    x: e.mouse.x + dx,
                    y: e.mouse.y + dy,
                    ..e.mouse.clone()
                },
                ..e.clone()
            }),
        }
    }
}

// SWT-style model

#[derive(Clone, Debug, PartialEq)]
pub struct SwtKeyEvent {
    /// Unsigned millisecond counter stored in a signed 32 bit field
    pub time: i32,
    pub state_mask: u32,
    pub key_code: u32,
    pub key_location: u32,
    pub character: char,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwtMouseEvent {
    pub time: i32,
    pub state_mask: u32,
    pub button: u32,
    /// Click count, or wheel count for wheel events (positive is up)
    pub count: i32,
    pub x: i32,
    pub y: i32,
}

impl SwtMouseEvent {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            time: 0,
            state_mask: 0,
            button: 0,
            count: 0,
            x,
            y,
        }
    }

    fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SwtEvent {
    KeyDown(SwtKeyEvent),
    KeyUp(SwtKeyEvent),
    MouseDown(SwtMouseEvent),
    MouseUp(SwtMouseEvent),
    MouseDoubleClick(SwtMouseEvent),
    MouseMove(SwtMouseEvent),
    MouseEnter(SwtMouseEvent),
    MouseExit(SwtMouseEvent),
    MouseHover(SwtMouseEvent),
    MouseWheel(SwtMouseEvent),
}

impl SwtEvent {
    pub fn translated(&self, dx: i32, dy: i32) -> SwtEvent {
        match self {
            SwtEvent::KeyDown(_) | SwtEvent::KeyUp(_) => self.clone(),
            SwtEvent::MouseDown(e) => SwtEvent::MouseDown(e.translated(dx, dy)),
            SwtEvent::MouseUp(e) => SwtEvent::MouseUp(e.translated(dx, dy)),
            SwtEvent::MouseDoubleClick(e) => SwtEvent::MouseDoubleClick(e.translated(dx, dy)),
            SwtEvent::MouseMove(e) => SwtEvent::MouseMove(e.translated(dx, dy)),
            SwtEvent::MouseEnter(e) => SwtEvent::MouseEnter(e.translated(dx, dy)),
            SwtEvent::MouseExit(e) => SwtEvent::MouseExit(e.translated(dx, dy)),
            SwtEvent::MouseHover(e) => SwtEvent::MouseHover(e.translated(dx, dy)),
            SwtEvent::MouseWheel(e) => SwtEvent::MouseWheel(e.translated(dx, dy)),
        }
    }
}
