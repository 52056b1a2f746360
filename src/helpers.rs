use crate::report::{ErrorKey, Reports};
use crate::token::Token;

/// Warns about a redefinition of a catalog entry.
pub(crate) fn dup_error(key: &Token, other: &Token, id: &str, reports: &mut Reports) {
    reports.warn2(
        key,
        ErrorKey::CatalogDup,
        &format!("{id} redefines an existing {id}"),
        other,
        "the other one is here",
    );
}
