//! Native event forwarders
//!
//! One forwarder per toolkit and listener category is attached to every peer
//! the factory creates. A forwarder translates the native event, dispatches
//! the abstract event to its component and, for the toolkit that swallows
//! events once listeners are attached, hands unconsumed mouse input to the
//! parent container.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use tracing::trace;

use crate::component::Component;
use crate::domain::value_objects::{ModifierMask, Point, Toolkit};
use crate::toolkit::NativeContainer;

use super::conversion::{
    convert_swt_character, convert_swt_event_time, convert_swt_key_code,
    convert_swt_key_location, convert_swt_state_mask,
};
use super::event::{
    InputEvent, KeyEvent, KeyEventKind, KeyLocation, MouseEvent, MouseEventKind, MouseWheelEvent,
};
use super::listener_set::ListenerCategory;
use super::native::{
    NativeEvent, SwingEvent, SwingKeyEvent, SwingKeyId, SwingMouseEvent, SwingMouseId, SwtEvent,
    SwtKeyEvent, SwtMouseEvent,
};

/// Peer state a forwarder needs while handling one native event
#[derive(Clone, Default)]
pub struct ForwardContext {
    /// Current scroll offset when the peer scrolls its content
    pub scroll_offset: Option<Point>,
    /// Location of the peer inside its parent container
    pub location: Point,
    pub parent: Option<Rc<dyn NativeContainer>>,
}

/// Receives native events on behalf of a component
pub trait NativeListener {
    fn toolkit(&self) -> Toolkit;

    fn category(&self) -> ListenerCategory;

    /// Handle a native event; returns whether an abstract listener consumed it
    ///
    /// Events of other toolkits or categories are ignored.
    fn on_native_event(&self, event: &NativeEvent, context: &ForwardContext) -> bool;
}

/// Create the forwarder for `toolkit` and `category` feeding `component`
pub fn create_forwarder(
    toolkit: Toolkit,
    category: ListenerCategory,
    component: Weak<Component>,
) -> Rc<dyn NativeListener> {
    match toolkit {
        Toolkit::Swing => Rc::new(SwingForwarder {
            category,
            component,
        }),
        Toolkit::Swt => Rc::new(SwtForwarder {
            category,
            component,
            last_pressed_button: Cell::new(0),
        }),
    }
}

/// Whether an event must be re-dispatched to the parent container by hand
///
/// Only unconsumed mouse and wheel events of a toolkit without automatic
/// propagation qualify.
pub fn forwards_to_parent(toolkit: Toolkit, consumed: bool, event: &InputEvent) -> bool {
    !consumed
        && toolkit.requires_manual_propagation()
        && event.category() != ListenerCategory::Key
        && event.is_dispatchable()
}

fn native_category(event: &NativeEvent) -> ListenerCategory {
    match event {
        NativeEvent::Swing(SwingEvent::Key(_)) => ListenerCategory::Key,
        NativeEvent::Swing(SwingEvent::Mouse(_)) => ListenerCategory::Mouse,
        NativeEvent::Swing(SwingEvent::MouseWheel(_)) => ListenerCategory::MouseWheel,
        NativeEvent::Swt(SwtEvent::KeyDown(_) | SwtEvent::KeyUp(_)) => ListenerCategory::Key,
        NativeEvent::Swt(SwtEvent::MouseWheel(_)) => ListenerCategory::MouseWheel,
        NativeEvent::Swt(_) => ListenerCategory::Mouse,
    }
}

/// Dispatch a translated event and apply the forwarding policy
fn deliver(
    toolkit: Toolkit,
    component: &Weak<Component>,
    event: InputEvent,
    native: &NativeEvent,
    context: &ForwardContext,
) -> bool {
    let Some(component) = component.upgrade() else {
        return false;
    };

    let mut event = event.with_source(component.id());
    if let Some(offset) = context.scroll_offset {
        event = event.translated(offset.x, offset.y);
    }

    let consumed = component.dispatch_event(&event);

    if forwards_to_parent(toolkit, consumed, &event) {
        if let Some(parent) = &context.parent {
            trace!(
                component = %component.id(),
                location = ?context.location,
                "forwarding unconsumed event to parent"
            );
            parent.dispatch_native(native.translated(context.location.x, context.location.y));
        }
    }
    consumed
}

pub struct SwingForwarder {
    category: ListenerCategory,
    component: Weak<Component>,
}

impl NativeListener for SwingForwarder {
    fn toolkit(&self) -> Toolkit {
        Toolkit::Swing
    }

    fn category(&self) -> ListenerCategory {
        self.category
    }

    fn on_native_event(&self, event: &NativeEvent, context: &ForwardContext) -> bool {
        let NativeEvent::Swing(native) = event else {
            return false;
        };
        if native_category(event) != self.category {
            return false;
        }
        deliver(
            Toolkit::Swing,
            &self.component,
            translate_swing(native),
            event,
            context,
        )
    }
}

pub struct SwtForwarder {
    category: ListenerCategory,
    component: Weak<Component>,
    /// Button held since the last press, 0 when none
    last_pressed_button: Cell<u32>,
}

impl NativeListener for SwtForwarder {
    fn toolkit(&self) -> Toolkit {
        Toolkit::Swt
    }

    fn category(&self) -> ListenerCategory {
        self.category
    }

    fn on_native_event(&self, event: &NativeEvent, context: &ForwardContext) -> bool {
        let NativeEvent::Swt(native) = event else {
            return false;
        };
        if native_category(event) != self.category {
            return false;
        }

        let pressed = self.last_pressed_button.get();
        match native {
            SwtEvent::MouseDown(e) => self.last_pressed_button.set(e.button),
            SwtEvent::MouseUp(_) => self.last_pressed_button.set(0),
            _ => {}
        }

        match translate_swt(native, pressed) {
            Some(translated) => deliver(Toolkit::Swt, &self.component, translated, event, context),
            None => false,
        }
    }
}

fn swing_time(when: i64) -> u64 {
    u64::try_from(when).unwrap_or(0)
}

fn swing_mouse(e: &SwingMouseEvent, kind: MouseEventKind) -> MouseEvent {
    MouseEvent {
        source: None,
        kind,
        time: swing_time(e.when),
        modifiers: ModifierMask::from_bits_retain(e.modifiers_ex),
        button: e.button,
        click_count: e.click_count,
        popup_trigger: e.popup_trigger,
        x: e.x,
        y: e.y,
    }
}

fn swing_key(e: &SwingKeyEvent) -> KeyEvent {
    KeyEvent {
        source: None,
        kind: match e.id {
            SwingKeyId::Pressed => KeyEventKind::Pressed,
            SwingKeyId::Released => KeyEventKind::Released,
            SwingKeyId::Typed => KeyEventKind::Typed,
        },
        time: swing_time(e.when),
        modifiers: ModifierMask::from_bits_retain(e.modifiers_ex),
        key_code: e.key_code,
        key_location: KeyLocation::from_awt(e.key_location),
        key_char: e.key_char,
    }
}

/// Translate a Swing-style native event; values already use the abstract layout
pub fn translate_swing(event: &SwingEvent) -> InputEvent {
    match event {
        SwingEvent::Key(e) => InputEvent::Key(swing_key(e)),
        SwingEvent::Mouse(e) => {
            let kind = match e.id {
                SwingMouseId::Pressed => MouseEventKind::Pressed,
                SwingMouseId::Released => MouseEventKind::Released,
                SwingMouseId::Clicked => MouseEventKind::Clicked,
                SwingMouseId::Entered => MouseEventKind::Entered,
                SwingMouseId::Exited => MouseEventKind::Exited,
                SwingMouseId::Moved => MouseEventKind::Moved,
                SwingMouseId::Dragged => MouseEventKind::Dragged,
            };
            InputEvent::Mouse(swing_mouse(e, kind))
        }
        SwingEvent::MouseWheel(e) => InputEvent::MouseWheel(MouseWheelEvent {
            mouse: swing_mouse(&e.mouse, MouseEventKind::Wheel),
            wheel_rotation: e.wheel_rotation,
            precise_wheel_rotation: e.precise_wheel_rotation,
        }),
    }
}

fn swt_mouse(e: &SwtMouseEvent, kind: MouseEventKind) -> MouseEvent {
    MouseEvent {
        source: None,
        kind,
        time: convert_swt_event_time(e.time),
        modifiers: convert_swt_state_mask(e.state_mask, e.button),
        button: e.button,
        click_count: u32::try_from(e.count).unwrap_or(0),
        popup_trigger: false,
        x: e.x,
        y: e.y,
    }
}

fn swt_key(e: &SwtKeyEvent, kind: KeyEventKind) -> KeyEvent {
    KeyEvent {
        source: None,
        kind,
        time: convert_swt_event_time(e.time),
        modifiers: convert_swt_state_mask(e.state_mask, 0),
        key_code: convert_swt_key_code(e.key_code),
        key_location: convert_swt_key_location(e.key_location),
        key_char: convert_swt_character(e.character),
    }
}

/// Translate an SWT-style native event
///
/// `pressed_button` is the button held before this event, used to tell drags
/// from plain moves. Hover and double-click have no abstract counterpart.
pub fn translate_swt(event: &SwtEvent, pressed_button: u32) -> Option<InputEvent> {
    let translated = match event {
        SwtEvent::KeyDown(e) => InputEvent::Key(swt_key(e, KeyEventKind::Pressed)),
        SwtEvent::KeyUp(e) => InputEvent::Key(swt_key(e, KeyEventKind::Released)),
        SwtEvent::MouseDown(e) => InputEvent::Mouse(swt_mouse(e, MouseEventKind::Pressed)),
        SwtEvent::MouseUp(e) => InputEvent::Mouse(swt_mouse(e, MouseEventKind::Released)),
        SwtEvent::MouseEnter(e) => InputEvent::Mouse(swt_mouse(e, MouseEventKind::Entered)),
        SwtEvent::MouseExit(e) => InputEvent::Mouse(swt_mouse(e, MouseEventKind::Exited)),
        SwtEvent::MouseMove(e) => {
            let kind = if pressed_button > 0 {
                MouseEventKind::Dragged
            } else {
                MouseEventKind::Moved
            };
            InputEvent::Mouse(swt_mouse(e, kind))
        }
        SwtEvent::MouseWheel(e) => {
            let mut mouse = swt_mouse(e, MouseEventKind::Wheel);
            // the count is the wheel count here, not a click count
            mouse.click_count = 0;
            // SWT counts upwards rotation as positive
            InputEvent::MouseWheel(MouseWheelEvent::new(mouse, -e.count))
        }
        SwtEvent::MouseHover(_) | SwtEvent::MouseDoubleClick(_) => return None,
    };
    Some(translated)
}
