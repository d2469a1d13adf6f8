use std::time::{Duration, Instant};

/// Deadline-based debounce timer. Every `poke` pushes the deadline out to
/// `now + delay`; `fire` reports due-ness exactly once and disarms itself.
/// The clock is passed in so the timer stays deterministic under test.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn poke(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Opaque handle identifying one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Generation counter guarding list fetches: every new fetch invalidates all
/// earlier tickets, so a completion that raced past a newer request is
/// discarded instead of overwriting fresher state.
#[derive(Debug, Default)]
pub struct FetchGate {
    current: u64,
}

impl FetchGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> FetchTicket {
        self.current = self.current.wrapping_add(1);
        FetchTicket(self.current)
    }

    /// Number of fetches issued so far; lets callers observe that an action
    /// did (or did not) trigger a request.
    pub fn generation(&self) -> u64 {
        self.current
    }

    pub fn admits(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debouncer_fires_once_after_quiet_period() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(400));

        // Three keystrokes in quick succession keep pushing the deadline out.
        debouncer.poke(start);
        debouncer.poke(start + Duration::from_millis(100));
        debouncer.poke(start + Duration::from_millis(200));

        assert!(!debouncer.fire(start + Duration::from_millis(450)));
        assert!(debouncer.fire(start + Duration::from_millis(600)));
        assert!(!debouncer.fire(start + Duration::from_millis(700)));
        assert!(!debouncer.is_armed());
    }

    #[test]
    fn cancel_disarms_pending_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(100));
        debouncer.poke(start);
        debouncer.cancel();
        assert!(!debouncer.fire(start + Duration::from_millis(500)));
    }

    #[test]
    fn gate_admits_only_the_latest_ticket() {
        let mut gate = FetchGate::new();
        let first = gate.issue();
        let second = gate.issue();

        assert!(!gate.admits(first));
        assert!(gate.admits(second));

        let third = gate.issue();
        assert!(!gate.admits(second));
        assert!(gate.admits(third));
    }
}
