//! Relay abstract input from one component to others
//!
//! Useful for containers that show another component's output and want that
//! component to react to input received by the container.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::component::Component;

use super::event::{InputEvent, KeyEvent, MouseEvent, MouseWheelEvent};
use super::listener::{KeyListener, MouseListener, MouseWheelListener};

#[derive(Default)]
pub struct ComponentRelay {
    targets: RefCell<Vec<Weak<Component>>>,
}

impl ComponentRelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_target(&self, target: &Rc<Component>) {
        let mut targets = self.targets.borrow_mut();
        targets.retain(|t| t.strong_count() > 0);
        if !targets.iter().any(|t| t.ptr_eq(&Rc::downgrade(target))) {
            targets.push(Rc::downgrade(target));
        }
    }

    pub fn remove_target(&self, target: &Rc<Component>) -> bool {
        let mut targets = self.targets.borrow_mut();
        let before = targets.len();
        targets.retain(|t| !t.ptr_eq(&Rc::downgrade(target)));
        targets.len() != before
    }

    /// Number of targets that are still alive
    pub fn target_count(&self) -> usize {
        self.targets
            .borrow()
            .iter()
            .filter(|t| t.strong_count() > 0)
            .count()
    }

    /// Dispatch `event` to every live target; true if any consumed it
    pub fn relay(&self, event: &InputEvent) -> bool {
        let targets: Vec<Rc<Component>> = {
            let mut targets = self.targets.borrow_mut();
            targets.retain(|t| t.strong_count() > 0);
            targets.iter().filter_map(Weak::upgrade).collect()
        };

        let mut consumed = false;
        for target in targets {
            consumed |= target.dispatch_event(&event.with_source(target.id()));
        }
        consumed
    }
}

impl KeyListener for ComponentRelay {
    fn key_pressed(&self, event: &KeyEvent) -> bool {
        self.relay(&InputEvent::Key(event.clone()))
    }

    fn key_released(&self, event: &KeyEvent) -> bool {
        self.relay(&InputEvent::Key(event.clone()))
    }
}

impl MouseListener for ComponentRelay {
    fn mouse_pressed(&self, event: &MouseEvent) -> bool {
        self.relay(&InputEvent::Mouse(event.clone()))
    }

    fn mouse_released(&self, event: &MouseEvent) -> bool {
        self.relay(&InputEvent::Mouse(event.clone()))
    }

    fn mouse_entered(&self, event: &MouseEvent) -> bool {
        self.relay(&InputEvent::Mouse(event.clone()))
    }

    fn mouse_exited(&self, event: &MouseEvent) -> bool {
        self.relay(&InputEvent::Mouse(event.clone()))
    }

    fn mouse_moved(&self, event: &MouseEvent) -> bool {
        self.relay(&InputEvent::Mouse(event.clone()))
    }

    fn mouse_dragged(&self, event: &MouseEvent) -> bool {
        self.relay(&InputEvent::Mouse(event.clone()))
    }
}

impl MouseWheelListener for ComponentRelay {
    fn mouse_wheel_moved(&self, event: &MouseWheelEvent) -> bool {
        self.relay(&InputEvent::MouseWheel(event.clone()))
    }
}
