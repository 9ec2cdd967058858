//! Guard allowing at most one outstanding request per logical operation.

/// Proof that the holder started the current flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct SingleFlight {
    issued: u64,
    current: Option<u64>,
}

impl SingleFlight {
    /// Starts a flight, or returns `None` while another one is outstanding.
    pub fn try_begin(&mut self) -> Option<Ticket> {
        if self.current.is_some() {
            return None;
        }
        self.issued += 1;
        self.current = Some(self.issued);
        Some(Ticket(self.issued))
    }

    /// Ends the flight `ticket` belongs to. A stale ticket changes nothing
    /// and returns `false`.
    pub fn finish(&mut self, ticket: Ticket) -> bool {
        if self.current == Some(ticket.0) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_is_refused_while_pending() {
        let mut flight = SingleFlight::default();
        let ticket = flight.try_begin().unwrap();

        assert!(flight.is_pending());
        assert_eq!(flight.try_begin(), None);

        assert!(flight.finish(ticket));
        assert!(!flight.is_pending());
        assert!(flight.try_begin().is_some());
    }

    #[test]
    fn stale_ticket_does_not_end_a_newer_flight() {
        let mut flight = SingleFlight::default();
        let first = flight.try_begin().unwrap();
        assert!(flight.finish(first));

        let second = flight.try_begin().unwrap();
        assert!(!flight.finish(first));
        assert!(flight.is_pending());
        assert!(flight.finish(second));
    }
}
