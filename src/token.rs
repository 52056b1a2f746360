use std::borrow::Cow;
use std::ffi::OsStr;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A location in a catalog file, for use in reports.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Loc {
    pub pathname: Arc<PathBuf>,
    /// line 0 means the loc applies to the file as a whole.
    pub line: usize,
    pub column: usize,
    /// Byte offset into the file contents. Only meaningful while parsing.
    pub offset: usize,
}

impl Loc {
    pub fn for_file(pathname: Arc<PathBuf>) -> Self {
        Loc { pathname, line: 0, column: 0, offset: 0 }
    }

    pub fn pathname(&self) -> &Path {
        &self.pathname
    }

    pub fn filename(&self) -> Cow<str> {
        self.pathname.file_name().unwrap_or_else(|| OsStr::new("")).to_string_lossy()
    }
}

/// A string from a catalog file, together with the location it came from.
#[derive(Clone, Debug)]
pub struct Token {
    s: String,
    pub loc: Loc,
}

impl Token {
    pub fn new(s: String, loc: Loc) -> Self {
        Token { s, loc }
    }

    pub fn as_str(&self) -> &str {
        &self.s
    }

    pub fn is(&self, s: &str) -> bool {
        self.s == s
    }

    pub fn is_empty(&self) -> bool {
        self.s.is_empty()
    }

    /// Length in characters, for sizing the caret line under a report.
    pub fn width(&self) -> usize {
        self.s.chars().count()
    }

    pub fn into_string(self) -> String {
        self.s
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.s == other.s
    }
}

impl Eq for Token {}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.s)
    }
}
