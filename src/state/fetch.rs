//! Latest-Wins Fetch Tickets
//!
//! List pages can have several requests in flight when the user changes
//! filters quickly. The underlying fetch is never aborted; instead each fetch
//! takes a ticket from the page's [`RequestSequence`] and commits its response
//! only if the ticket is still current, so a slow early response can't
//! overwrite a later one.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct RequestSequence {
    current: Rc<Cell<u64>>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request generation, superseding all earlier tickets
    pub fn begin(&self) -> RequestTicket {
        let id = self.current.get() + 1;
        self.current.set(id);
        RequestTicket {
            sequence: self.current.clone(),
            id,
        }
    }
}

pub struct RequestTicket {
    sequence: Rc<Cell<u64>>,
    id: u64,
}

impl RequestTicket {
    /// True while no later request has begun
    pub fn is_current(&self) -> bool {
        self.sequence.get() == self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_ticket_is_current() {
        let sequence = RequestSequence::new();
        let ticket = sequence.begin();
        assert!(ticket.is_current());
    }

    #[test]
    fn test_later_request_supersedes_earlier() {
        let sequence = RequestSequence::new();
        let first = sequence.begin();
        let second = sequence.begin();
        // The earlier ticket is stale even if its response arrives last
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_sequences_are_independent() {
        let companies = RequestSequence::new();
        let investors = RequestSequence::new();
        let ticket = companies.begin();
        investors.begin();
        assert!(ticket.is_current());
    }
}
