#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod colour;
pub mod context;
pub mod errors;
pub mod feature;
pub mod format;
mod helpers;
pub mod item;
pub mod locale;
pub mod report;
pub mod session;
pub mod tables;
pub mod token;
pub mod validate;

pub use crate::catalog::Catalog;
pub use crate::context::MsgContext;
pub use crate::errors::LocaError;
pub use crate::format::{format_args, placeholders, FmtArg, FormatError, Placeholder};
pub use crate::locale::{Lang, DEFAULT_LANG, KNOWN_LANGUAGES};
pub use crate::report::{ErrorKey, LogReport, OutputStyle, Reports, Severity};
pub use crate::session::{Session, DEFAULT_DOMAIN};
pub use crate::validate::{langs_in_dir, validate_dir};
