use thiserror::Error;

/// Why a relay message could not be forwarded.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayError {
    /// The sender is not part of any exchange
    #[error("sender is not in an exchange")]
    NotInExchange,

    /// The sender is still waiting for a partner
    #[error("sender has no partner yet")]
    PartnerPending,
}

/// Errors talking to the matchmaker task.
#[derive(Error, Debug)]
pub enum MatchmakerError {
    /// The matchmaker task is gone and its command channel is closed
    #[error("matchmaker stopped")]
    Stopped,
}
