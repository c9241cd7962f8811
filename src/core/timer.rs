/// Throttled timer - fires at most once per interval, driven by tick deltas
#[derive(Debug, Clone, Copy)]
pub struct Throttled {
    min_interval: f32,
    time_since_last: f32,
}

impl Throttled {
    /// Create throttled timer; the first tick fires immediately
    pub fn new(min_interval: f32) -> Self {
        Self {
            min_interval,
            time_since_last: min_interval,
        }
    }

    /// Accumulate `delta`; true when at least one interval has passed since the last fire
    pub fn try_tick(&mut self, delta: f32) -> bool {
        self.time_since_last += delta;

        if self.time_since_last >= self.min_interval {
            self.time_since_last = 0.0;
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
    fn fires_immediately_then_waits_for_interval() {
        let mut timer = Throttled::new(0.5);
        assert!(timer.try_tick(0.0));
        assert!(!timer.try_tick(0.2));
        assert!(!timer.try_tick(0.2));
        assert!(timer.try_tick(0.2));
    }

    #[test]
    fn long_delta_fires_once() {
        let mut timer = Throttled::new(0.5);
        timer.try_tick(0.0);
        assert!(timer.try_tick(3.0));
        assert!(!timer.try_tick(0.1));
    }
}
