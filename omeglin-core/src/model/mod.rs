mod conn;
mod signaling;

pub use conn::ConnId;
pub use signaling::{GO_FIRST, MessageName, SignalMessage, WireMessage};
