//! Logging severity levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity of a log line, or the set of severities a category accepts.
///
/// Each concrete level owns one bit. [`All`](Severity::All) is the union of
/// the three and is only meaningful as a category's accepted set; it is not a
/// level a line can be written at.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Severity {
    /// Informational output.
    Info = 0b001,
    /// Something unexpected that does not stop the program.
    Warning = 0b010,
    /// A failure.
    Error = 0b100,
    /// Every severity.
    All = 0b111,
}

impl Severity {
    /// The concrete levels, in increasing severity.
    pub const LEVELS: [Severity; 3] = [Severity::Info, Severity::Warning, Severity::Error];

    /// Returns the bit pattern of this severity.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Returns the bracketed tag written before a message at this level.
    ///
    /// `All` has no tag.
    pub const fn tag(self) -> Option<&'static str> {
        match self {
            Severity::Info => Some("[INFO]"),
            Severity::Warning => Some("[WARNING]"),
            Severity::Error => Some("[ERROR]"),
            Severity::All => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
            Severity::All => write!(f, "all"),
        }
    }
}
