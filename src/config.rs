//! Run options for the contraction engine.

use std::fmt;
use std::str::FromStr;

use crate::error::WickError;

/// Output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// `<0|T[labels]|0> = ...` written for a terminal.
    #[default]
    Console,
}

/// Which diagrams to leave out of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ignore {
    /// Keep every contraction term.
    #[default]
    None,
    /// Drop terms whose pairing graph is disconnected.
    Vacuum,
}

impl FromStr for Mode {
    type Err = WickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "console" => Ok(Mode::Console),
            other => Err(WickError::UnsupportedMode(other.to_string())),
        }
    }
}

impl FromStr for Ignore {
    type Err = WickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" | "None" => Ok(Ignore::None),
            "vac" => Ok(Ignore::Vacuum),
            other => Err(WickError::UnsupportedIgnore(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Console => write!(f, "console"),
        }
    }
}

impl fmt::Display for Ignore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ignore::None => write!(f, "none"),
            Ignore::Vacuum => write!(f, "vac"),
        }
    }
}

/// Run-time options (single source of truth).
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub mode:     Mode,
    pub ignore:   Ignore,
    /// Expand first-partner branches on the rayon pool.
    pub parallel: bool,
}

impl Options {
    /// Options from the string values a caller would type.
    /// `ignore = None` means no filter. The vacuum filter bypasses the
    /// formatter, so `mode` is only checked when no filter is requested.
    pub fn parse(mode: &str, ignore: Option<&str>) -> Result<Self, WickError> {
        let ignore = ignore
            .map(str::parse::<Ignore>)
            .transpose()?
            .unwrap_or_default();
        let mode = match ignore {
            Ignore::None => mode.parse::<Mode>()?,
            Ignore::Vacuum => mode.parse::<Mode>().unwrap_or_default(),
        };
        Ok(Self { mode, ignore, parallel: false })
    }
}
