use std::path::Path;

use ahash::AHashMap;

use crate::catalog::Catalog;
use crate::context::MsgContext;
use crate::errors::LocaError;
use crate::format::{format_args, FmtArg, FormatError};
use crate::locale::{find_catalogs, Lang};
use crate::report::Reports;

/// The domain used by catalogs placed directly in the catalog directory.
pub const DEFAULT_DOMAIN: &str = "messages";

/// The active locale and its loaded catalogs.
///
/// Classic gettext keeps this in process-wide state set once per session;
/// here it is a value passed to every lookup, so concurrent sessions can
/// run different locales and tests stay isolated. All lookups are pure
/// functions over the immutable loaded tables.
#[derive(Clone, Debug, Default)]
pub struct Session {
    lang: Option<Lang>,
    domains: AHashMap<String, Catalog>,
}

impl Session {
    /// A session for the default locale. Every lookup falls back to the
    /// source string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a language's catalogs from a catalog directory.
    pub fn load(dir: &Path, lang: Lang, reports: &mut Reports) -> Result<Self, LocaError> {
        if lang.is_default() {
            return Ok(Self::new());
        }
        let files = find_catalogs(dir, &lang, reports);
        if files.is_empty() {
            return Err(LocaError::NoCatalogs {
                lang: lang.as_str().to_string(),
                dir: dir.to_path_buf(),
            });
        }
        let mut domains = AHashMap::new();
        for file in files {
            let catalog = Catalog::from_file(&file.path, reports)?;
            domains.insert(file.domain, catalog);
        }
        Ok(Session { lang: Some(lang), domains })
    }

    /// Switch to another locale. Output changes from the next lookup on.
    pub fn switch(&mut self, dir: &Path, lang: Lang, reports: &mut Reports) -> Result<(), LocaError> {
        *self = Session::load(dir, lang, reports)?;
        Ok(())
    }

    /// Back to the default locale, restoring source-language output.
    pub fn reset(&mut self) {
        *self = Session::new();
    }

    /// The active language, or None for the default locale.
    pub fn lang(&self) -> Option<&Lang> {
        self.lang.as_ref()
    }

    pub fn is_default(&self) -> bool {
        self.lang.is_none()
    }

    pub fn catalog(&self, domain: &str) -> Option<&Catalog> {
        self.domains.get(domain)
    }

    /// The full catalog lookup: domain, optional context, message key.
    /// Falls back to the key itself when untranslated or when no locale is
    /// active.
    pub fn dpgettext<'a>(&'a self, domain: &str, ctxt: Option<&str>, msgid: &'a str) -> &'a str {
        match self.domains.get(domain).and_then(|catalog| catalog.lookup(ctxt, msgid)) {
            Some(translated) => translated,
            None => msgid,
        }
    }

    pub fn gettext<'a>(&'a self, msgid: &'a str) -> &'a str {
        self.dpgettext(DEFAULT_DOMAIN, None, msgid)
    }

    pub fn dgettext<'a>(&'a self, domain: &str, msgid: &'a str) -> &'a str {
        self.dpgettext(domain, None, msgid)
    }

    pub fn pgettext<'a>(&'a self, ctxt: &str, msgid: &'a str) -> &'a str {
        self.dpgettext(DEFAULT_DOMAIN, Some(ctxt), msgid)
    }

    /// Contextful translation. The Empty context falls through to a plain
    /// lookup, so callers can thread a context unconditionally.
    pub fn translate<'a>(&'a self, ctx: MsgContext, msgid: &'a str) -> &'a str {
        let ctxt = ctx.canonical();
        if ctxt.is_empty() {
            self.gettext(msgid)
        } else {
            self.pgettext(ctxt, msgid)
        }
    }

    /// Resolve a template under a context and substitute `args` into it.
    pub fn render_msg(
        &self,
        ctx: MsgContext,
        msgid: &str,
        args: &[FmtArg],
    ) -> Result<String, FormatError> {
        format_args(self.translate(ctx, msgid), args)
    }

    /// Render a context's own canonical template with the supplied
    /// arguments.
    pub fn render(&self, ctx: MsgContext, args: &[FmtArg]) -> Result<String, FormatError> {
        self.render_msg(ctx, ctx.canonical(), args)
    }
}
