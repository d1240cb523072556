//! Wait for a while, and watch the bar fill up.
//!
//! `waitbar` blocks for a requested duration, polling a clock at a fixed
//! interval and reporting the elapsed milliseconds to a progress display.
//! When more than the requested duration has passed, the display is
//! finished and the wait returns.
//!
//! # How it works
//!
//! [`wait_with_progress`] is the whole loop. It talks to the outside world
//! through two traits: a [`Clock`], which tells the time and sleeps, and a
//! [`ProgressDisplay`], which is told how far along the wait is:
//!
//! ```rust,ignore
//! let total = waitbar::millis(target);
//! let display = BarDisplay::new(total)?;
//! let report = wait_with_progress(target, DEFAULT_INTERVAL, &mut SystemClock, display);
//! ```
//!
//! Polling with a synchronous sleep means the wait can overshoot by up to one
//! interval, which is fine for something a person is watching.
//!
//! [`wait_with_progress`]: crate::wait_with_progress

#![deny(missing_docs)]

mod clock;
mod display;
mod opt;
mod trace;
mod wait;

pub use clock::{Clock, SystemClock};
pub use display::{BarDisplay, ProgressDisplay};
pub use opt::{Opt, INTERVAL_ENV};
pub use trace::init_tracing;
pub use wait::{millis, wait_with_progress, WaitReport, DEFAULT_INTERVAL};

/// Re-export `clap` so that users of [`Opt`] don't need to depend on the
/// same fork of it.
pub use clap;
