use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ahash::AHashMap;
use strum::IntoEnumIterator;

use crate::catalog::parse::parse_po;
use crate::context::MsgContext;
use crate::errors::LocaError;
use crate::format::placeholders;
use crate::helpers::dup_error;
use crate::locale::read_error;
use crate::report::{ErrorKey, Reports};
use crate::token::{Loc, Token};

mod parse;

/// One translation unit from a catalog file.
#[derive(Clone, Debug)]
pub struct CatalogEntry {
    pub ctxt: Option<Token>,
    pub msgid: Token,
    pub msgstr: Token,
}

/// A parsed translation catalog: `(msgctxt, msgid)` pairs mapped to their
/// translations. Read-only once loaded.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pathname: Option<Arc<PathBuf>>,
    /// Outer key is the msgctxt, with `""` for entries without one.
    entries: AHashMap<String, AHashMap<String, CatalogEntry>>,
}

impl Catalog {
    /// Parse catalog contents. Malformed entries become reports and are
    /// skipped; parsing itself never fails.
    pub fn parse(pathname: &Path, content: &str, reports: &mut Reports) -> Self {
        let mut catalog = Catalog {
            pathname: Some(Arc::new(pathname.to_path_buf())),
            entries: AHashMap::new(),
        };
        let parsed: Vec<_> = parse_po(pathname, content, reports).collect();
        for entry in parsed {
            if entry.msgid.is_empty() {
                // The PO header entry carries metadata, not a translation.
                continue;
            }
            let ctxt = entry.ctxt.as_ref().map_or(String::new(), |t| t.as_str().to_string());
            let inner = catalog.entries.entry(ctxt).or_default();
            if let Some(other) = inner.get(entry.msgid.as_str()) {
                dup_error(&entry.msgid, &other.msgid, "catalog key", reports);
            }
            inner.insert(entry.msgid.as_str().to_string(), entry);
        }
        catalog
    }

    pub fn from_file(path: &Path, reports: &mut Reports) -> Result<Self, LocaError> {
        let content = read_to_string(path).map_err(|e| read_error(path, e))?;
        Ok(Self::parse(path, &content, reports))
    }

    /// Look up a translation. Returns None for missing entries and for
    /// entries whose translation is empty, so the caller can fall back.
    pub fn lookup(&self, ctxt: Option<&str>, msgid: &str) -> Option<&str> {
        let entry = self.entries.get(ctxt.unwrap_or(""))?.get(msgid)?;
        if entry.msgstr.is_empty() {
            None
        } else {
            Some(entry.msgstr.as_str())
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(|inner| inner.len()).sum()
    }

    fn file_loc(&self) -> Loc {
        match &self.pathname {
            Some(pathname) => Loc::for_file(Arc::clone(pathname)),
            None => Loc::for_file(Arc::new(PathBuf::new())),
        }
    }

    /// Post-load checks: empty translations, placeholder parity between a
    /// msgid and its translation, and contexts no translator asked for.
    ///
    /// The runtime keeps its fallback behavior no matter what these find;
    /// the point is to surface the problems while the catalog is being
    /// written rather than in play.
    pub fn validate(&self, reports: &mut Reports) {
        for (ctxt, inner) in &self.entries {
            if !ctxt.is_empty()
                && !MsgContext::iter().any(|mc| mc.canonical() == ctxt.as_str())
            {
                for entry in inner.values() {
                    let token = entry.ctxt.as_ref().unwrap_or(&entry.msgid);
                    reports.advice(
                        token,
                        ErrorKey::Context,
                        "msgctxt does not match any message context",
                    );
                }
            }
            for entry in inner.values() {
                self.validate_entry(entry, reports);
            }
        }
    }

    fn validate_entry(&self, entry: &CatalogEntry, reports: &mut Reports) {
        if entry.msgstr.is_empty() {
            reports.warn(&entry.msgid, ErrorKey::Catalog, "entry has no translation");
            return;
        }
        let wanted = match placeholders(entry.msgid.as_str()) {
            Ok(wanted) => wanted,
            Err(e) => {
                reports.warn(
                    &entry.msgid,
                    ErrorKey::Placeholder,
                    &format!("malformed placeholders in msgid: {e}"),
                );
                return;
            }
        };
        match placeholders(entry.msgstr.as_str()) {
            Ok(got) if got == wanted => (),
            Ok(_) => {
                reports.warn2(
                    &entry.msgstr,
                    ErrorKey::Placeholder,
                    "translation does not use the same placeholders as the source text",
                    &entry.msgid,
                    "the source text is here",
                );
            }
            Err(e) => {
                reports.warn(
                    &entry.msgstr,
                    ErrorKey::Placeholder,
                    &format!("malformed placeholders in translation: {e}"),
                );
            }
        }
    }

    /// Advise about message contexts this catalog has no entries for.
    /// Only meaningful for a default-domain catalog.
    pub fn check_coverage(&self, reports: &mut Reports) {
        for ctx in MsgContext::iter() {
            let canonical = ctx.canonical();
            if canonical.is_empty() {
                continue;
            }
            if self.lookup(Some(canonical), canonical).is_none() {
                reports.advice(
                    self.file_loc(),
                    ErrorKey::Coverage,
                    &format!("no translation for message context {ctx}"),
                );
            }
        }
    }
}
