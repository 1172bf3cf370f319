//! Localized-name resolution (made by FontLab https://www.fontlab.com/)

use crate::collection::NameTable;

/// Locale preferred for display names when the native entry is unusable.
pub const LOCALE_EN_US: &str = "en-us";

/// Resolve the best entry for `locale` from a localized-string table.
///
/// An empty locale selects entry 0, the table's default/native entry,
/// directly. A non-empty locale the table does not carry yields `None`;
/// so does any failure of the underlying table, indistinguishably.
/// Callers are expected to fall back either way.
pub fn resolve(names: &dyn NameTable, locale: &str) -> Option<String> {
    let index = if locale.is_empty() {
        0
    } else {
        match names.find_locale(locale) {
            Ok(Some(index)) => index,
            Ok(None) | Err(_) => return None,
        }
    };

    names.entry(index).ok()
}

/// Resolve the native-language entry, falling back to "en-us".
///
/// The native default wins over English when both exist; this order is
/// load-bearing for every display name the extractor emits.
pub fn resolve_native(names: &dyn NameTable) -> Option<String> {
    resolve(names, "").or_else(|| resolve(names, LOCALE_EN_US))
}
