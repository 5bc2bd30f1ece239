/// Generation counters for discarding stale async completions.
///
/// Each load and each edit session gets a fresh ticket. A response is only
/// applied if the ticket it was issued under is still the current one.

/// Identifies one load or one edit session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Hands out monotonically increasing tickets
#[derive(Debug, Default)]
pub struct Generation {
    current: u64,
}

impl Generation {
    /// Invalidate every outstanding ticket and return a new one
    pub fn advance(&mut self) -> Ticket {
        self.current += 1;
        Ticket(self.current)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.current
    }
}
