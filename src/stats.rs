use std::time::Duration;

/// Keystroke accounting for one run. Counters only ever go up; every
/// keystroke/space event increments exactly one of them. Elapsed time is
/// injected by the host at read time, so the derived metrics are pure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub correct: usize,
    pub wrong: usize,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.correct + self.wrong
    }

    /// Fraction of keystrokes that were correct, in [0, 1]. Zero until the
    /// first correct keystroke.
    pub fn accuracy(&self) -> f64 {
        if self.correct == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total() as f64
    }

    /// Words per minute over all keystrokes (5 keystrokes = 1 word).
    pub fn raw_wpm(&self, elapsed: Duration) -> f64 {
        let minutes = elapsed.as_secs_f64() / 60.0;
        if minutes <= 0.0 {
            return 0.0;
        }
        self.total() as f64 / 5.0 / minutes
    }

    /// Words per minute counting only correct keystrokes.
    pub fn net_wpm(&self, elapsed: Duration) -> f64 {
        let minutes = elapsed.as_secs_f64() / 60.0;
        if minutes <= 0.0 {
            return 0.0;
        }
        self.correct as f64 / 5.0 / minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_is_zero_without_correct_keystrokes() {
        let stats = Stats {
            correct: 0,
            wrong: 25,
        };
        assert_eq!(stats.accuracy(), 0.0);
    }

    #[test]
    fn accuracy_stays_within_bounds() {
        let stats = Stats {
            correct: 3,
            wrong: 1,
        };
        assert_eq!(stats.accuracy(), 0.75);

        let perfect = Stats {
            correct: 10,
            wrong: 0,
        };
        assert_eq!(perfect.accuracy(), 1.0);

        let poor = Stats {
            correct: 1,
            wrong: 999,
        };
        assert!(poor.accuracy() > 0.0 && poor.accuracy() < 1.0);
    }

    #[test]
    fn wpm_is_zero_for_zero_elapsed_time() {
        let stats = Stats {
            correct: 50,
            wrong: 10,
        };
        assert_eq!(stats.raw_wpm(Duration::ZERO), 0.0);
        assert_eq!(stats.net_wpm(Duration::ZERO), 0.0);
    }

    #[test]
    fn wpm_formulas_divide_keystrokes_by_five_per_minute() {
        let stats = Stats {
            correct: 50,
            wrong: 10,
        };
        let one_minute = Duration::from_secs(60);
        assert_eq!(stats.raw_wpm(one_minute), 12.0);
        assert_eq!(stats.net_wpm(one_minute), 10.0);

        let thirty_secs = Duration::from_secs(30);
        assert_eq!(stats.net_wpm(thirty_secs), 20.0);
    }
}
