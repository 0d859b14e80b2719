//! Matchmaking and signaling server for Omeglin, an anonymous WebRTC video chat.
//!
//! Browsers open a WebSocket on [`MATCHMAKING_PATH`] and exchange JSON frames of
//! the form `{"name": "...", "data": "..."}`:
//!
//! 1. `PAIRING_START` queues the socket. When a second socket starts, the first
//!    receives `PARTNER_FOUND` with data `GO_FIRST` and creates the SDP offer;
//!    the second receives a bare `PARTNER_FOUND`.
//! 2. `SDP_OFFER`, `SDP_ANSWER` and `SDP_ICE_CANDIDATE` are relayed verbatim to
//!    the partner.
//! 3. `PAIRING_DONE` from both sides ends the exchange. `PAIRING_ABORT` or a
//!    closed socket ends it early and sends `PARTNER_LEFT` to the partner.
//!
//! All connection events are funneled into a single [`Matchmaker`] task, so every
//! lookup and update of the exchange queue happens without interleaving.

pub mod app;
pub mod config;
pub mod error;
pub mod matchmaker;
pub mod signaling;

pub use app::{AppState, MATCHMAKING_PATH, app, router};
pub use config::ServerConfig;
pub use error::{MatchmakerError, RelayError};
pub use matchmaker::*;
pub use signaling::*;
