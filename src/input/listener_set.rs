//! Listener sets owned by a component
//!
//! A set holds distinct listener references (compared by identity) and a weak
//! back-reference to the component that owns it. Order carries no meaning.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::component::Component;

/// The listener set an event is routed to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerCategory {
    Key,
    Mouse,
    MouseWheel,
}

impl ListenerCategory {
    pub const ALL: [ListenerCategory; 3] = [
        ListenerCategory::Key,
        ListenerCategory::Mouse,
        ListenerCategory::MouseWheel,
    ];
}

pub struct ListenerSet<L: ?Sized> {
    owner: Weak<Component>,
    listeners: RefCell<Vec<Rc<L>>>,
}

fn same_listener<L: ?Sized>(a: &Rc<L>, b: &Rc<L>) -> bool {
    Rc::as_ptr(a).cast::<()>() == Rc::as_ptr(b).cast::<()>()
}

impl<L: ?Sized> ListenerSet<L> {
    pub fn new(owner: Weak<Component>) -> Self {
        Self {
            owner,
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// The owning component, if it is still alive
    pub fn owner(&self) -> Option<Rc<Component>> {
        self.owner.upgrade()
    }

    /// Add a listener; returns false if the same listener is already present
    pub fn add(&self, listener: Rc<L>) -> bool {
        if self.contains(&listener) {
            return false;
        }
        self.listeners.borrow_mut().push(listener);
        true
    }

    pub fn remove(&self, listener: &Rc<L>) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|l| !same_listener(l, listener));
        listeners.len() != before
    }

    pub fn contains(&self, listener: &Rc<L>) -> bool {
        self.listeners
            .borrow()
            .iter()
            .any(|l| same_listener(l, listener))
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.listeners.borrow_mut().clear();
    }

    /// Current listeners; later changes to the set do not affect the copy
    pub fn snapshot(&self) -> Vec<Rc<L>> {
        self.listeners.borrow().clone()
    }

    /// Invoke `handler` on every listener and return whether any consumed
    ///
    /// All listeners run even after one reports consumption. Listeners may
    /// add or remove listeners while being called; that affects the next
    /// event only.
    pub fn fan_out(&self, mut handler: impl FnMut(&L) -> bool) -> bool {
        let mut consumed = false;
        for listener in self.snapshot() {
            consumed |= handler(&listener);
        }
        consumed
    }
}
