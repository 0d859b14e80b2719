use omeglin_core::ConnId;

/// One pairing slot.
///
/// `first` is filled on creation and becomes the offerer; `second` is filled
/// when a partner shows up. Completion is tracked per side, so a side that
/// repeats `PAIRING_DONE` is only counted once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    first: ConnId,
    second: Option<ConnId>,
    first_done: bool,
    second_done: bool,
}

impl Exchange {
    pub(crate) fn waiting(first: ConnId) -> Self {
        Self {
            first,
            second: None,
            first_done: false,
            second_done: false,
        }
    }

    pub fn first(&self) -> ConnId {
        self.first
    }

    pub fn is_waiting(&self) -> bool {
        self.second.is_none()
    }

    pub fn contains(&self, conn: ConnId) -> bool {
        self.first == conn || self.second == Some(conn)
    }

    /// The other member of the pair, if `conn` is a member and has a partner.
    pub fn partner_of(&self, conn: ConnId) -> Option<ConnId> {
        if self.first == conn {
            self.second
        } else if self.second == Some(conn) {
            Some(self.first)
        } else {
            None
        }
    }

    pub fn completion_count(&self) -> u8 {
        u8::from(self.first_done) + u8::from(self.second_done)
    }

    pub(crate) fn fill_second(&mut self, conn: ConnId) {
        self.second = Some(conn);
    }

    pub(crate) fn mark_done(&mut self, conn: ConnId) -> u8 {
        if self.first == conn {
            self.first_done = true;
        } else if self.second == Some(conn) {
            self.second_done = true;
        }
        self.completion_count()
    }
}
