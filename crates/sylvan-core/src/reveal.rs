use crate::constants::REVEAL_STAGE_MAX;

/// One-way counter gating the static backdrop layers. Starts at 0 and
/// saturates at [`REVEAL_STAGE_MAX`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RevealStage(u8);

impl RevealStage {
    pub const MAX: RevealStage = RevealStage(REVEAL_STAGE_MAX);

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_complete(self) -> bool {
        self >= Self::MAX
    }

    /// Layer with `threshold` is visible.
    pub fn shows(self, threshold: u8) -> bool {
        self.0 >= threshold
    }

    /// Moves one stage forward. Returns false once already complete.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.0 += 1;
        true
    }
}

/// Fixed-interval timer measured against host timestamps.
#[derive(Clone, Copy, Debug)]
pub struct IntervalClock {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl IntervalClock {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    /// Number of whole intervals elapsed since the previous fire. The first
    /// call primes the clock and returns 0.
    pub fn poll(&mut self, now_ms: f64) -> u32 {
        let Some(last) = self.last_ms else {
            self.last_ms = Some(now_ms);
            return 0;
        };
        if now_ms < last || self.interval_ms <= 0.0 {
            return 0;
        }
        let steps = ((now_ms - last) / self.interval_ms).floor();
        if steps >= 1.0 {
            self.last_ms = Some(last + steps * self.interval_ms);
        }
        steps.min(u32::MAX as f64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_counts_whole_intervals_and_keeps_remainder() {
        let mut c = IntervalClock::new(100.0);
        assert_eq!(c.poll(1000.0), 0);
        assert_eq!(c.poll(1099.0), 0);
        assert_eq!(c.poll(1150.0), 1);
        assert_eq!(c.poll(1199.0), 0);
        assert_eq!(c.poll(1420.0), 3);
    }

    #[test]
    fn clock_ignores_time_going_backwards() {
        let mut c = IntervalClock::new(100.0);
        c.poll(500.0);
        assert_eq!(c.poll(100.0), 0);
    }
}
