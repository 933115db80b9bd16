//! Convergence detection on the history of mean fitness.
//!
//! After each generation the mean fitness is recorded. Once more than
//! `window` generations exist, the latest mean is compared with the mean
//! `window - 1` generations earlier (the `window`-th most recent entry); the
//! run has converged when the relative improvement falls below `threshold`.

/// Relative change from `baseline` to `latest`, scaled by `|baseline|`.
///
/// A zero baseline is defined explicitly instead of dividing by zero: no
/// change gives `0.0`, a rise gives `+∞`, a fall gives `−∞`.
pub fn relative_improvement(baseline: f64, latest: f64) -> f64 {
    let delta = latest - baseline;
    if baseline == 0.0 {
        if delta > 0.0 {
            f64::INFINITY
        } else if delta < 0.0 {
            f64::NEG_INFINITY
        } else {
            0.0
        }
    } else {
        delta / baseline.abs()
    }
}

#[derive(Debug, Clone)]
pub struct ConvergenceMonitor {
    window: usize,
    threshold: f64,
    history: Vec<f64>,
}

impl ConvergenceMonitor {
    pub fn new(window: usize, threshold: f64) -> Self {
        Self {
            window,
            threshold,
            history: Vec::new(),
        }
    }

    /// Appends a generation's mean fitness.
    pub fn record(&mut self, mean_fitness: f64) {
        self.history.push(mean_fitness);
    }

    /// Mean fitness per generation, oldest first.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Relative improvement over the window, once enough generations exist.
    pub fn improvement(&self) -> Option<f64> {
        // The check starts at generation index `window`, i.e. `window + 1` entries.
        if self.history.len() <= self.window {
            return None;
        }
        let latest = *self.history.last()?;
        let baseline = self.history[self.history.len() - self.window];
        Some(relative_improvement(baseline, latest))
    }

    pub fn has_converged(&self) -> bool {
        self.improvement()
            .is_some_and(|improvement| improvement < self.threshold)
    }
}
