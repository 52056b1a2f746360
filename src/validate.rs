//! Whole-directory catalog validation, wrapped by `delve-loca-check`.

use std::collections::BTreeSet;
use std::path::Path;

use walkdir::WalkDir;

use crate::catalog::Catalog;
use crate::errors::LocaError;
use crate::locale::{find_catalogs, is_lang_tag, Lang};
use crate::report::Reports;
use crate::session::DEFAULT_DOMAIN;

/// The languages that have at least one catalog under `dir`.
pub fn langs_in_dir(dir: &Path) -> Vec<Lang> {
    let mut tags = BTreeSet::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(2).into_iter().flatten() {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "po") {
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                if is_lang_tag(stem) {
                    tags.insert(stem.to_string());
                }
            }
        }
    }
    tags.iter().filter_map(|tag| Lang::new(tag).ok()).collect()
}

/// Load and check every catalog of the given languages under `dir`.
///
/// Collects filename, parse, duplicate, placeholder and coverage reports.
/// The runtime's fallback behavior is unaffected by anything found here;
/// this pass exists so translators see the problems before players do.
pub fn validate_dir(dir: &Path, langs: &[Lang], reports: &mut Reports) -> Result<(), LocaError> {
    for lang in langs {
        let files = find_catalogs(dir, lang, reports);
        if files.is_empty() {
            return Err(LocaError::NoCatalogs {
                lang: lang.as_str().to_string(),
                dir: dir.to_path_buf(),
            });
        }
        for file in files {
            let catalog = Catalog::from_file(&file.path, reports)?;
            catalog.validate(reports);
            if file.domain == DEFAULT_DOMAIN {
                catalog.check_coverage(reports);
            }
        }
    }
    Ok(())
}
