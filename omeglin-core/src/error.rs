use crate::model::MessageName;
use thiserror::Error;

/// Errors raised while decoding a signaling frame.
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// Not JSON, or an unknown message name
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A `name` outside the signaling vocabulary
    #[error("unknown message name {0:?}")]
    UnknownName(String),

    /// A relay message arrived without its payload
    #[error("{0} requires a data payload")]
    MissingData(MessageName),
}
