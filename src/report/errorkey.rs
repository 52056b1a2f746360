use std::fmt::{Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

/// Problem categories, used for filtering reports and for output tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKey {
    ReadError,
    ParseError,
    Encoding,
    Filename,
    Catalog,
    CatalogDup,
    Placeholder,
    Context,
    Coverage,
}

// This has to be kept up to date with ErrorKey and with its Display impl
impl FromStr for ErrorKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "read-error" => ErrorKey::ReadError,
            "parse-error" => ErrorKey::ParseError,
            "encoding" => ErrorKey::Encoding,
            "filename" => ErrorKey::Filename,
            "catalog" => ErrorKey::Catalog,
            "catalog-dup" => ErrorKey::CatalogDup,
            "placeholder" => ErrorKey::Placeholder,
            "context" => ErrorKey::Context,
            "coverage" => ErrorKey::Coverage,
            _ => {
                return Err(ParseKeyError::new("unknown error key"));
            }
        };
        Ok(key)
    }
}

impl Display for ErrorKey {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), std::fmt::Error> {
        match self {
            ErrorKey::ReadError => write!(fmt, "read-error"),
            ErrorKey::ParseError => write!(fmt, "parse-error"),
            ErrorKey::Encoding => write!(fmt, "encoding"),
            ErrorKey::Filename => write!(fmt, "filename"),
            ErrorKey::Catalog => write!(fmt, "catalog"),
            ErrorKey::CatalogDup => write!(fmt, "catalog-dup"),
            ErrorKey::Placeholder => write!(fmt, "placeholder"),
            ErrorKey::Context => write!(fmt, "context"),
            ErrorKey::Coverage => write!(fmt, "coverage"),
        }
    }
}

#[derive(Debug, Error)]
#[error("{msg}")]
pub struct ParseKeyError {
    msg: String,
}

impl ParseKeyError {
    fn new(msg: &str) -> Self {
        ParseKeyError { msg: msg.to_string() }
    }
}
