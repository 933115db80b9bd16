/// Mutation rate that halves every time a generation beats the best score seen so far.
///
/// The rate never increases. The first observed generation always counts as
/// an improvement, since the running best starts at negative infinity.
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptiveMutationRate {
    rate: f64,
    best_fitness_achieved: f64,
}

impl AdaptiveMutationRate {
    pub fn new(initial_rate: f64) -> Self {
        Self {
            rate: initial_rate,
            best_fitness_achieved: f64::NEG_INFINITY,
        }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn best_fitness_achieved(&self) -> f64 {
        self.best_fitness_achieved
    }

    /// Records a generation's best fitness. Returns `true` if the rate was halved.
    pub fn observe(&mut self, generation_best: f64) -> bool {
        if generation_best > self.best_fitness_achieved {
            self.best_fitness_achieved = generation_best;
            self.rate /= 2.0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_observation_halves() {
        let mut rate = AdaptiveMutationRate::new(0.01);

        assert!(rate.observe(-3.0));
        assert_eq!(rate.rate(), 0.005);
        assert_eq!(rate.best_fitness_achieved(), -3.0);
    }

    #[test]
    fn test_only_strict_improvements_halve() {
        let mut rate = AdaptiveMutationRate::new(0.8);

        assert!(rate.observe(1.0));
        assert!(!rate.observe(1.0));
        assert!(!rate.observe(0.5));
        assert!(rate.observe(1.5));
        assert_eq!(rate.rate(), 0.2);
        assert_eq!(rate.best_fitness_achieved(), 1.5);
    }

    #[test]
    fn test_rate_never_increases() {
        let mut rate = AdaptiveMutationRate::new(1.0);
        let mut previous = rate.rate();

        for best in [0.0, -1.0, 2.0, 2.0, 1.0, 3.5, -10.0, 4.0] {
            rate.observe(best);
            assert!(rate.rate() <= previous);
            previous = rate.rate();
        }
    }
}
