//! Progress displays driven by the wait loop.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{self, Write};

const TEMPLATE: &str = "{percent:>3}% |{wide_bar}| ({pos}/{len} ms, {elapsed_precise})";

/// Something that shows how far a wait has progressed.
///
/// Constructing an implementation corresponds to initializing it with the
/// total; after that the loop only moves the position and finishes it.
pub trait ProgressDisplay {
    /// Show `current` out of the total the display was created with.
    fn set_value(&mut self, current: u64);

    /// Mark the display complete and release the terminal line.
    fn finish(&mut self);
}

impl<D: ProgressDisplay + ?Sized> ProgressDisplay for &mut D {
    fn set_value(&mut self, current: u64) {
        (**self).set_value(current)
    }

    fn finish(&mut self) {
        (**self).finish()
    }
}

/// A progress bar rendered with `indicatif`.
///
/// The bar draws to stderr. When stderr isn't a terminal nothing is drawn,
/// so redirecting output doesn't fill a log with escape sequences.
pub struct BarDisplay {
    bar: ProgressBar,
    // Where the line ending goes once the bar is finished; indicatif leaves
    // the cursor at the end of the bar.
    line_end: Box<dyn Write + Send>,
}

impl BarDisplay {
    /// Create a bar scaled to `total`, drawn on stderr.
    pub fn new(total: u64) -> anyhow::Result<Self> {
        Self::with_target(total, ProgressDrawTarget::stderr(), Box::new(io::stderr()))
    }

    /// Create a bar scaled to `total` which never draws anything.
    pub fn hidden(total: u64) -> anyhow::Result<Self> {
        Self::with_target(total, ProgressDrawTarget::hidden(), Box::new(io::sink()))
    }

    fn with_target(
        total: u64,
        target: ProgressDrawTarget,
        line_end: Box<dyn Write + Send>,
    ) -> anyhow::Result<Self> {
        let style = ProgressStyle::with_template(TEMPLATE)?.progress_chars("█▉▊▋▌▍▎▏ ");
        let bar = ProgressBar::with_draw_target(Some(total), target);
        bar.set_style(style);
        Ok(Self { bar, line_end })
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.bar.position()
    }

    #[cfg(test)]
    fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}

impl ProgressDisplay for BarDisplay {
    fn set_value(&mut self, current: u64) {
        // indicatif doesn't clamp, and the last poll can land past the end.
        let len = self.bar.length().unwrap_or(u64::MAX);
        self.bar.set_position(current.min(len));
    }

    fn finish(&mut self) {
        self.bar.finish();
        if !self.bar.is_hidden() {
            // Nothing useful to do if the terminal went away.
            let _ = writeln!(self.line_end);
            let _ = self.line_end.flush();
        }
    }
}
