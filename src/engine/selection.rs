use crate::config::SelectionMode;
use rand::Rng;
use rand::seq::SliceRandom;

/// Picks card indices for the engine. Holds the pending round for `ShuffledQueue`.
#[derive(Debug, Clone, Default)]
pub(crate) struct Selector {
    mode: SelectionMode,
    queue: Vec<usize>,
}

impl Selector {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            queue: Vec::new(),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: SelectionMode) {
        if self.mode != mode {
            self.mode = mode;
            self.queue.clear();
        }
    }

    /// Forget the current round.
    pub fn reset(&mut self) {
        self.queue.clear();
    }

    /// Index in `[0, len)`. `len` must be non-zero.
    pub fn next<R: Rng>(&mut self, len: usize, rng: &mut R) -> usize {
        match self.mode {
            SelectionMode::WithReplacement => rng.gen_range(0..len),
            SelectionMode::ShuffledQueue => {
                // Cards added since the round started wait for the next one.
                if self.queue.is_empty() {
                    self.queue = (0..len).collect();
                    self.queue.shuffle(rng);
                }
                self.queue.pop().unwrap_or(0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn draws_with_replacement_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut selector = Selector::new(SelectionMode::WithReplacement);
        for _ in 0..500 {
            assert!(selector.next(5, &mut rng) < 5);
        }
    }

    #[test]
    fn single_card_deck_always_yields_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        for mode in SelectionMode::ALL {
            let mut selector = Selector::new(mode);
            for _ in 0..20 {
                assert_eq!(selector.next(1, &mut rng), 0);
            }
        }
    }

    #[test]
    fn shuffled_queue_visits_every_card_once_per_round() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut selector = Selector::new(SelectionMode::ShuffledQueue);
        for _ in 0..3 {
            let round: HashSet<usize> = (0..6).map(|_| selector.next(6, &mut rng)).collect();
            assert_eq!(round, (0..6).collect::<HashSet<_>>());
        }
    }

    #[test]
    fn switching_mode_drops_pending_round() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut selector = Selector::new(SelectionMode::ShuffledQueue);
        selector.next(4, &mut rng);
        assert_eq!(selector.queue.len(), 3);
        selector.set_mode(SelectionMode::WithReplacement);
        assert!(selector.queue.is_empty());
    }
}
