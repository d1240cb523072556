use crate::{Clock, ProgressDisplay};
use std::convert::TryFrom;
use std::time::Duration;
use tracing::{debug, trace};

/// The pause between polls when none is configured.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// What happened during a call to [`wait_with_progress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitReport {
    /// How many times the display was updated.
    pub updates: u64,
    /// The last value passed to the display, if any.
    pub last_value: Option<u64>,
    /// Time elapsed since the start when the loop observed the target had
    /// passed.
    pub elapsed: Duration,
}

/// Convert `duration` into whole milliseconds, saturating at `u64::MAX`.
pub fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Block until more than `target` has elapsed on `clock`, reporting the
/// elapsed milliseconds to `display` every `interval`.
///
/// The caller creates `display` scaled to `millis(target)`. This function
/// takes ownership of it for the wait and calls [`ProgressDisplay::finish`]
/// exactly once before returning, even when `target` is zero.
///
/// The start instant is taken from `clock` on entry, so the wait overshoots
/// `target` by at most one `interval`.
pub fn wait_with_progress<C, D>(
    target: Duration,
    interval: Duration,
    clock: &mut C,
    mut display: D,
) -> WaitReport
where
    C: Clock + ?Sized,
    D: ProgressDisplay,
{
    debug!(?target, ?interval, "starting wait");

    let start = clock.now();
    let mut updates = 0;
    let mut last_value = None;

    let elapsed = loop {
        let elapsed = clock.now().saturating_duration_since(start);
        if elapsed > target {
            break elapsed;
        }

        let value = millis(elapsed);
        trace!(value, "progress");
        display.set_value(value);
        updates += 1;
        last_value = Some(value);

        clock.sleep(interval);
    };

    display.finish();
    debug!(?elapsed, updates, "wait finished");

    WaitReport {
        updates,
        last_value,
        elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    /// A clock that only moves when slept on, optionally with a fixed
    /// amount of extra lag per sleep to imitate scheduler jitter.
    struct ManualClock {
        base: Instant,
        offset: Duration,
        lag: Duration,
        sleeps: Vec<Duration>,
    }

    impl ManualClock {
        fn new() -> Self {
            Self::with_lag(Duration::from_millis(0))
        }

        fn with_lag(lag: Duration) -> Self {
            Self {
                base: Instant::now(),
                offset: Duration::from_millis(0),
                lag,
                sleeps: Vec::new(),
            }
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.base + self.offset
        }

        fn sleep(&mut self, duration: Duration) {
            self.offset += duration + self.lag;
            self.sleeps.push(duration);
        }
    }

    #[derive(Default)]
    struct Recording {
        values: Vec<u64>,
        finished: u32,
    }

    impl ProgressDisplay for Recording {
        fn set_value(&mut self, current: u64) {
            assert_eq!(self.finished, 0, "set_value after finish");
            self.values.push(current);
        }

        fn finish(&mut self) {
            self.finished += 1;
        }
    }

    #[test]
    fn zero_target_still_finishes() {
        let mut clock = ManualClock::new();
        let mut display = Recording::default();
        let report = wait_with_progress(
            Duration::from_millis(0),
            DEFAULT_INTERVAL,
            &mut clock,
            &mut display,
        );

        // Elapsed is exactly zero on the first check, which isn't past the
        // target, so one update happens before the first sleep.
        assert_eq!(display.values, vec![0]);
        assert_eq!(display.finished, 1);
        assert_eq!(report.updates, 1);
        assert_eq!(report.elapsed, DEFAULT_INTERVAL);
    }

    #[test]
    fn half_second_reports_every_interval() {
        let mut clock = ManualClock::new();
        let mut display = Recording::default();
        let report = wait_with_progress(
            Duration::from_millis(500),
            DEFAULT_INTERVAL,
            &mut clock,
            &mut display,
        );

        assert_eq!(display.values, vec![0, 100, 200, 300, 400, 500]);
        assert_eq!(display.finished, 1);
        assert_eq!(clock.sleeps.len(), 6);
        assert!(clock.sleeps.iter().all(|d| *d == DEFAULT_INTERVAL));
        assert_eq!(report.last_value, Some(500));
        assert_eq!(report.elapsed, Duration::from_millis(600));
    }

    #[test]
    fn values_never_decrease_and_overshoot_is_bounded() {
        let target = Duration::from_millis(1234);
        let interval = Duration::from_millis(70);
        let mut clock = ManualClock::with_lag(Duration::from_millis(3));
        let mut display = Recording::default();
        let report = wait_with_progress(target, interval, &mut clock, &mut display);

        assert!(display.values.windows(2).all(|w| w[0] <= w[1]));
        assert!(report.elapsed > target);
        let last = Duration::from_millis(report.last_value.unwrap());
        assert!(last <= target);
        assert!(last + interval + Duration::from_millis(3) > target);
        assert_eq!(report.updates as usize, display.values.len());
    }

    #[test]
    fn custom_interval() {
        let mut clock = ManualClock::new();
        let mut display = Recording::default();
        wait_with_progress(
            Duration::from_millis(90),
            Duration::from_millis(25),
            &mut clock,
            &mut display,
        );
        assert_eq!(display.values, vec![0, 25, 50, 75]);
        assert_eq!(display.finished, 1);
    }

    #[test]
    fn real_clock_waits_at_least_target() {
        let target = Duration::from_millis(150);
        let start = Instant::now();
        let mut display = Recording::default();
        let report = wait_with_progress(
            target,
            Duration::from_millis(10),
            &mut crate::SystemClock,
            &mut display,
        );
        assert!(start.elapsed() > target);
        assert!(report.elapsed > target);
        assert_eq!(display.finished, 1);
    }

    #[test]
    fn millis_saturates() {
        assert_eq!(millis(Duration::from_millis(1500)), 1500);
        assert_eq!(millis(Duration::from_secs(u64::MAX)), u64::MAX);
    }
}
