use std::thread;
use std::time::{Duration, Instant};

/// A source of monotonic time that can also block the caller.
///
/// [`wait_with_progress`] only ever asks a `Clock` for the current instant
/// and for a pause between polls, so tests can drive it without sleeping.
///
/// [`wait_with_progress`]: crate::wait_with_progress
pub trait Clock {
    /// Return the current instant.
    fn now(&self) -> Instant;

    /// Block the calling thread for `duration`.
    fn sleep(&mut self, duration: Duration);
}

/// The operating system's monotonic clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }

    #[inline]
    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

#[test]
fn test_system_clock_sleeps() {
    let mut clock = SystemClock;
    let start = clock.now();
    clock.sleep(Duration::from_millis(20));
    assert!(clock.now() - start >= Duration::from_millis(20));
}
