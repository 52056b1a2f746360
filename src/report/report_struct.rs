use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::report::ErrorKey;
use crate::token::Loc;

/// Describes a report about a potentially problematic situation that can be logged.
#[derive(Debug, Clone)]
pub struct LogReport {
    /// Used for choosing output colors and for filtering reports.
    pub severity: Severity,
    /// Defines the problem category. Used for filtering reports.
    pub key: ErrorKey,
    /// The primary error message. A short description of the problem.
    pub msg: String,
    /// Optional info message to be printed at the end.
    pub info: Option<String>,
    /// Should contain one or more elements.
    pub pointers: Vec<PointedMessage>,
}

impl LogReport {
    /// Returns the primary pointer.
    pub fn primary(&self) -> &PointedMessage {
        self.pointers.first().expect("a LogReport must always have at least one PointedMessage")
    }

    /// Returns the length of the longest line number, for gutter alignment.
    pub fn indentation(&self) -> usize {
        self.pointers.iter().map(|pointer| pointer.loc.line.to_string().len()).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub struct PointedMessage {
    /// Which file and where in the file the problem occurs.
    /// Might point to a whole file, rather than a specific location in the file.
    pub loc: Loc,
    /// The length of the offending phrase in characters.
    /// This determines the number of carets that are printed at the given location.
    pub length: usize,
    /// A short message that will be printed at the caret location.
    pub msg: Option<String>,
}

impl PointedMessage {
    pub fn new(loc: Loc) -> Self {
        PointedMessage { loc, length: 1, msg: None }
    }
}

/// Determines the output colour.
/// User can also filter by minimum severity level: e.g. don't show me Info-level messages.
#[derive(
    Default,
    Debug,
    Display,
    Clone,
    Copy,
    Ord,
    PartialOrd,
    Eq,
    PartialEq,
    Hash,
    EnumIter,
    Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Will not affect anything the player sees, but is sloppy catalog upkeep.
    Untidy,
    /// May lead to minor glitches, such as a context nobody translated yet.
    Info,
    /// Will noticeably affect what the player sees, such as a lost placeholder.
    #[default]
    Warning,
    /// The catalog entry cannot be used at all.
    Error,
}
