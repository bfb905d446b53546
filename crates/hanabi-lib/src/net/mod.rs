pub use error::{FrameError, ProtocolError, RejectReason};
pub use message::Message;

pub mod connection;
mod error;
mod message;
