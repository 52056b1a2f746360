use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use walkdir::WalkDir;

use crate::errors::LocaError;
use crate::report::{ErrorKey, Reports};
use crate::session::DEFAULT_DOMAIN;
use crate::token::Loc;

/// The source language of the message tables. It has no catalog; every
/// lookup under the default locale falls back to the source string.
pub const DEFAULT_LANG: &str = "en";

// Languages the project ships catalogs for.
pub const KNOWN_LANGUAGES: &[&str] = &[
    "cs", "de", "el", "es", "fi", "fr", "hu", "it", "ja", "ko", "lt", "lv", "pl", "pt", "ru", "zh",
];

/// A validated lowercase language tag, such as `ru` or `pt_br`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Lang(String);

impl Lang {
    pub fn new(tag: &str) -> Result<Self, LocaError> {
        if is_lang_tag(tag) {
            Ok(Lang(tag.to_string()))
        } else {
            Err(LocaError::BadLang(tag.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_LANG
    }

    /// Whether this is one of the languages the project ships catalogs for.
    pub fn is_known(&self) -> bool {
        self.0 == DEFAULT_LANG || KNOWN_LANGUAGES.contains(&self.0.as_str())
    }
}

impl Display for Lang {
    fn fmt(&self, f: &mut Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.0)
    }
}

pub(crate) fn is_lang_tag(tag: &str) -> bool {
    (2..=8).contains(&tag.len())
        && tag.starts_with(|c: char| c.is_ascii_lowercase())
        && tag.chars().all(|c| c.is_ascii_lowercase() || c == '_')
}

/// A catalog file found in a catalog directory.
#[derive(Clone, Debug)]
pub struct CatalogFile {
    pub domain: String,
    pub lang: Lang,
    pub path: PathBuf,
}

/// Scan a catalog directory for the catalogs of one language.
///
/// The layout is `<dir>/<lang>.po` for the default domain and
/// `<dir>/<domain>/<lang>.po` for named domains. Files that do not fit the
/// layout produce filename reports; catalogs of other languages are simply
/// left alone.
pub fn find_catalogs(dir: &Path, lang: &Lang, reports: &mut Reports) -> Vec<CatalogFile> {
    let mut found = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(2).into_iter().flatten() {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().is_none() || path.extension().is_some_and(|ext| ext != "po") {
            continue;
        }
        let loc = Loc::for_file(Arc::new(path.to_path_buf()));
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            reports.warn_info(
                loc,
                ErrorKey::Filename,
                "could not determine language from filename",
                "catalog filenames should be <language>.po",
            );
            continue;
        };
        if !is_lang_tag(stem) {
            reports.warn_info(
                loc,
                ErrorKey::Filename,
                "could not determine language from filename",
                &format!(
                    "catalog filenames should be <language>.po, where language is one of {}",
                    KNOWN_LANGUAGES.join(", ")
                ),
            );
            continue;
        }
        if !KNOWN_LANGUAGES.contains(&stem) && stem != DEFAULT_LANG {
            reports.advice(
                &loc,
                ErrorKey::Filename,
                &format!("`{stem}` is not one of the shipped languages"),
            );
        }
        if stem != lang.as_str() {
            continue;
        }
        let domain = if entry.depth() == 1 {
            DEFAULT_DOMAIN.to_string()
        } else {
            // depth 2: the parent directory names the domain.
            match path.parent().and_then(Path::file_name).and_then(|name| name.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            }
        };
        found.push(CatalogFile { domain, lang: lang.clone(), path: path.to_path_buf() });
    }
    found
}

/// Report a read error in a way the caller can propagate with `?`.
pub(crate) fn read_error(path: &Path, source: std::io::Error) -> LocaError {
    LocaError::Read { path: path.to_path_buf(), source }
}
