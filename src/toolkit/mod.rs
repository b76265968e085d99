//! Peer contract, native widget seams and the default peers

pub mod default_peer;
pub mod native;
pub mod peer;

pub use default_peer::{default_peer_type, DefaultSwingPeer, DefaultSwtPeer};
pub use native::{NativeContainer, NativeWidget};
pub use peer::{Peer, PeerCore};
