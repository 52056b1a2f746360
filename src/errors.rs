use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from locating and reading catalog files.
///
/// Problems *inside* a catalog are not errors; they become reports and the
/// offending entry is skipped, so that one bad translation never takes down
/// a whole locale.
#[derive(Debug, Error)]
pub enum LocaError {
    #[error("could not read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("`{0}` is not a valid language tag")]
    BadLang(String),
    #[error("no catalogs for language `{lang}` under {dir}")]
    NoCatalogs { lang: String, dir: PathBuf },
}
