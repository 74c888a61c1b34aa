//! Request tickets that let only the latest report fetch install its result.
//!
//! Fetches are never cancelled; a slow earlier response can resolve after a later one. Each
//! fetch takes a ticket up front and checks it on completion, so a stale response is dropped
//! instead of overwriting newer data.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchSequencer {
    latest: u64,
}

impl FetchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new fetch; every earlier ticket becomes stale.
    pub fn issue(&mut self) -> FetchTicket {
        self.latest = self.latest.wrapping_add(1);
        FetchTicket(self.latest)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_current() {
        let mut seq = FetchSequencer::new();
        let first = seq.issue();
        assert!(seq.is_current(first));

        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
        assert!(second > first);
    }

    #[test]
    fn out_of_order_resolution_keeps_newest() {
        let mut seq = FetchSequencer::new();
        let slow = seq.issue();
        let fast = seq.issue();

        let mut installed = None;
        for (ticket, label) in [(fast, "fast"), (slow, "slow")] {
            if seq.is_current(ticket) {
                installed = Some(label);
            }
        }
        assert_eq!(installed, Some("fast"));
    }
}
