//! Abstract input events, listeners and native event forwarding

pub mod conversion;
pub mod event;
pub mod forwarder;
pub mod keys;
pub mod listener;
pub mod listener_set;
pub mod native;
pub mod relay;

pub use event::{
    InputEvent, KeyEvent, KeyEventKind, KeyLocation, MouseEvent, MouseEventKind, MouseWheelEvent,
    CHAR_UNDEFINED,
};
pub use forwarder::{create_forwarder, ForwardContext, NativeListener};
pub use listener::{KeyListener, MouseListener, MouseWheelListener};
pub use listener_set::{ListenerCategory, ListenerSet};
pub use native::NativeEvent;
pub use relay::ComponentRelay;
