//! Abstract listener interfaces
//!
//! Every handler returns whether it consumed the event. Consumption never
//! stops other listeners from seeing the event; it only decides whether the
//! event is forwarded to the parent container.

use super::event::{KeyEvent, MouseEvent, MouseWheelEvent};

pub trait KeyListener {
    fn key_pressed(&self, _event: &KeyEvent) -> bool {
        false
    }

    fn key_released(&self, _event: &KeyEvent) -> bool {
        false
    }
}

pub trait MouseListener {
    fn mouse_pressed(&self, _event: &MouseEvent) -> bool {
        false
    }

    fn mouse_released(&self, _event: &MouseEvent) -> bool {
        false
    }

    fn mouse_entered(&self, _event: &MouseEvent) -> bool {
        false
    }

    fn mouse_exited(&self, _event: &MouseEvent) -> bool {
        false
    }

    fn mouse_moved(&self, _event: &MouseEvent) -> bool {
        false
    }

    fn mouse_dragged(&self, _event: &MouseEvent) -> bool {
        false
    }
}

pub trait MouseWheelListener {
    fn mouse_wheel_moved(&self, event: &MouseWheelEvent) -> bool;
}

impl<F> MouseWheelListener for F
where
    F: Fn(&MouseWheelEvent) -> bool,
{
    fn mouse_wheel_moved(&self, event: &MouseWheelEvent) -> bool {
        self(event)
    }
}
