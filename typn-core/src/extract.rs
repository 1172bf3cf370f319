//! Per-family metadata extraction (made by FontLab https://www.fontlab.com/)

use serde::{Deserialize, Serialize};

use crate::collection::{FontCollection, InfoStringId};
use crate::error::FamilyError;
use crate::names::{resolve, resolve_native, LOCALE_EN_US};

/// Identity of one authored font face.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontMetadata {
    /// Canonical, locale-independent identifier. Always the native
    /// PostScript name, never a localized variant.
    pub postscript_name: String,
    /// Display name, "en-us" preferred.
    pub full_name: String,
    /// Family display name shared by every record of the family.
    pub family: String,
}

/// Outcome of processing exactly one family: all of its records, or the
/// first terminal error. The `Err` arm discards partial records by
/// construction.
pub type FamilyResult = Result<Vec<FontMetadata>, FamilyError>;

/// Extract identity records for every authored face of one family.
///
/// Simulated faces are skipped silently. Any structural failure - a
/// handle the platform cannot return, a missing name table, a name that
/// resolves under no locale - invalidates the whole family rather than
/// emitting partial entries.
pub fn extract_family(collection: &dyn FontCollection, family_index: usize) -> FamilyResult {
    let family = collection.family(family_index)?;
    let family_names = family.names()?;

    let native_family_name =
        resolve_native(family_names.as_ref()).ok_or(FamilyError::NoFamilyName)?;
    // The localized family name is attached to every record; font-level
    // name tables never override it.
    let family_name =
        resolve(family_names.as_ref(), LOCALE_EN_US).unwrap_or(native_family_name);

    let mut fonts = Vec::new();
    for font_index in 0..family.font_count() {
        let font = family.font(font_index)?;

        if font.is_simulated() {
            continue;
        }

        let postscript_names = font
            .info_strings(InfoStringId::PostscriptName)?
            .ok_or(FamilyError::NoFullNameOrPostScriptName)?;
        let postscript_name = resolve_native(postscript_names.as_ref())
            .ok_or(FamilyError::NoFullNameOrPostScriptName)?;

        let full_names = font
            .info_strings(InfoStringId::FullName)?
            .ok_or(FamilyError::NoFullNameOrPostScriptName)?;
        let full_name = resolve(full_names.as_ref(), LOCALE_EN_US)
            .or_else(|| resolve(full_names.as_ref(), ""))
            .unwrap_or_else(|| postscript_name.clone());

        fonts.push(FontMetadata {
            postscript_name,
            full_name,
            family: family_name.clone(),
        });
    }

    Ok(fonts)
}
