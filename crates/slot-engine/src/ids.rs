//! Identifier sources for schedule entries.
//!
//! Callers pass an [`IdSource`] into a [`Schedule`](crate::Schedule) rather
//! than relying on a process-wide counter, so two schedules never share id
//! state and tests can pin ids.

/// Hands out identifiers for new schedule entries.
pub trait IdSource {
    fn next_id(&mut self) -> u64;
}

/// Monotonic ids starting at 1.
#[derive(Debug, Clone)]
pub struct SequenceIds {
    next: u64,
}

impl SequenceIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequenceIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequenceIds {
    fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl<F: FnMut() -> u64> IdSource for F {
    fn next_id(&mut self) -> u64 {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_starts_at_one() {
        let mut ids = SequenceIds::new();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
    }

    #[test]
    fn closures_are_id_sources() {
        let mut n: u64 = 100;
        let mut source = move || {
            n += 10;
            n
        };
        assert_eq!(source.next_id(), 110);
        assert_eq!(source.next_id(), 120);
    }
}
