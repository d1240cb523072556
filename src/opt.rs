//! Command-line options.
//!
//! Durations accept anything [`humantime::parse_duration`] does, such as
//! `500ms`, `5s`, or `1m 30s`.

use crate::wait::DEFAULT_INTERVAL;
use anyhow::{anyhow, Context};
use clap::{Clap, IntoApp};
use std::env::var_os;
use std::ffi::OsString;
use std::io::{self, Write};
use std::time::Duration;

/// The environment variable consulted for the polling interval when
/// `--interval` isn't given.
pub const INTERVAL_ENV: &str = "WAITBAR_INTERVAL";

/// Wait for a duration while drawing a progress bar.
#[derive(Debug, Clap)]
#[clap(name = "waitbar")]
pub struct Opt {
    /// Duration to wait
    #[clap(long, default_value = "1s", parse(try_from_str = humantime::parse_duration))]
    pub wait: Duration,

    /// Pause between progress updates [default: 100ms, or $WAITBAR_INTERVAL]
    #[clap(long, parse(try_from_str = parse_interval))]
    pub interval: Option<Duration>,

    /// Don't draw the progress bar
    #[clap(short, long)]
    pub quiet: bool,
}

impl Opt {
    /// Parse options from an explicit argument list, whose first element is
    /// the program name.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Clap>::try_parse_from(args)
    }

    /// Write the full usage text to `w`.
    pub fn write_usage<W: Write>(w: &mut W) -> io::Result<()> {
        <Self as IntoApp>::into_app().write_help(w)
    }

    /// The polling interval: `--interval` if given, then `$WAITBAR_INTERVAL`,
    /// then the built-in default.
    pub fn interval(&self) -> anyhow::Result<Duration> {
        self.interval_or(var_os(INTERVAL_ENV))
    }

    fn interval_or(&self, env: Option<OsString>) -> anyhow::Result<Duration> {
        if let Some(interval) = self.interval {
            return Ok(interval);
        }
        match env {
            None => Ok(DEFAULT_INTERVAL),
            Some(value) => {
                let value = value
                    .into_string()
                    .map_err(|_| anyhow!("${} is not valid UTF-8", INTERVAL_ENV))?;
                parse_interval(&value)
                    .map_err(|msg| anyhow!(msg))
                    .with_context(|| format!("invalid ${}", INTERVAL_ENV))
            }
        }
    }
}

fn parse_interval(s: &str) -> Result<Duration, String> {
    let interval = humantime::parse_duration(s).map_err(|err| err.to_string())?;
    if interval == Duration::from_millis(0) {
        return Err("interval must be greater than zero".to_owned());
    }
    Ok(interval)
}
