//! Stacking-order rank allocation.

/// Single-writer counter handing out strictly increasing front ranks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZOrderArbiter {
    counter: u64,
}

impl Default for ZOrderArbiter {
    fn default() -> Self {
        Self { counter: 1 }
    }
}

impl ZOrderArbiter {
    /// Advances the counter and returns the new front rank.
    pub fn next_rank(&mut self) -> u64 {
        self.counter = self.counter.saturating_add(1);
        self.counter
    }

    /// Highest rank handed out so far (the initial value when none was).
    pub fn current(&self) -> u64 {
        self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_start_above_initial_counter_and_strictly_increase() {
        let mut arbiter = ZOrderArbiter::default();
        assert_eq!(arbiter.current(), 1);

        let ranks: Vec<u64> = (0..5).map(|_| arbiter.next_rank()).collect();
        assert_eq!(ranks, vec![2, 3, 4, 5, 6]);
        assert_eq!(arbiter.current(), 6);
    }
}
