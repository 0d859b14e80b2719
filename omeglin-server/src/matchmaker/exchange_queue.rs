use crate::error::RelayError;
use crate::matchmaker::Exchange;
use omeglin_core::{ConnId, SignalMessage};
use serde::Serialize;

/// A message to deliver once the queue update that produced it is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outbound {
    pub to: ConnId,
    pub message: SignalMessage,
}

impl Outbound {
    pub fn new(to: ConnId, message: SignalMessage) -> Self {
        Self { to, message }
    }
}

/// Snapshot of the queue, served on `/api/stats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QueueStats {
    pub exchanges: usize,
    pub waiting: usize,
    pub paired: usize,
    pub completing: usize,
}

/// The pairing state machine.
///
/// Exchanges are kept in creation order and searched linearly, so the oldest
/// waiting exchange is always the one matched next. A connection is a member
/// of at most one exchange.
#[derive(Debug, Default)]
pub struct ExchangeQueue {
    exchanges: Vec<Exchange>,
}

impl ExchangeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exchange_of(&self, conn: ConnId) -> Option<&Exchange> {
        self.exchanges.iter().find(|ex| ex.contains(conn))
    }

    fn position_of(&self, conn: ConnId) -> Option<usize> {
        self.exchanges.iter().position(|ex| ex.contains(conn))
    }

    /// Queue `conn` for pairing, matching it with the oldest waiting exchange.
    ///
    /// Any exchange `conn` already belongs to is dropped first, without notifying
    /// a partner it may have had.
    pub fn pairing_start(&mut self, conn: ConnId) -> Vec<Outbound> {
        self.remove_membership(conn);
        let mut outbound = Vec::new();

        match self.exchanges.iter_mut().find(|ex| ex.is_waiting()) {
            Some(exchange) => {
                exchange.fill_second(conn);
                outbound.push(Outbound::new(
                    exchange.first(),
                    SignalMessage::PartnerFound { go_first: true },
                ));
                outbound.push(Outbound::new(
                    conn,
                    SignalMessage::PartnerFound { go_first: false },
                ));
            }
            None => self.exchanges.push(Exchange::waiting(conn)),
        }

        outbound
    }

    /// Drop the exchange of `conn`, whatever its completion state. Used for both
    /// `PAIRING_ABORT` and connection close.
    pub fn pairing_abort(&mut self, conn: ConnId) -> Option<Outbound> {
        self.leave(conn)
    }

    /// Record that `conn` finished its side of the exchange.
    ///
    /// Returns the new completion count, or `None` if `conn` has no exchange.
    /// The exchange is removed once both sides are done.
    pub fn pairing_done(&mut self, conn: ConnId) -> Option<u8> {
        let index = self.position_of(conn)?;
        let count = self.exchanges[index].mark_done(conn);
        if count == 2 {
            self.exchanges.remove(index);
        }
        Some(count)
    }

    /// Address a relay message to the partner of `conn`.
    pub fn relay(&self, conn: ConnId, message: SignalMessage) -> Result<Outbound, RelayError> {
        let exchange = self.exchange_of(conn).ok_or(RelayError::NotInExchange)?;
        let partner = exchange
            .partner_of(conn)
            .ok_or(RelayError::PartnerPending)?;
        Ok(Outbound::new(partner, message))
    }

    pub fn stats(&self) -> QueueStats {
        self.exchanges
            .iter()
            .fold(QueueStats::default(), |mut stats, ex| {
                stats.exchanges += 1;
                if ex.is_waiting() {
                    stats.waiting += 1;
                } else {
                    stats.paired += 1;
                }
                if ex.completion_count() == 1 {
                    stats.completing += 1;
                }
                stats
            })
    }

    fn remove_membership(&mut self, conn: ConnId) {
        if let Some(index) = self.position_of(conn) {
            self.exchanges.remove(index);
        }
    }

    fn leave(&mut self, conn: ConnId) -> Option<Outbound> {
        let index = self.position_of(conn)?;
        let exchange = self.exchanges.remove(index);
        exchange
            .partner_of(conn)
            .map(|partner| Outbound::new(partner, SignalMessage::PartnerLeft))
    }
}
