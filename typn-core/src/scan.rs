//! Filesystem-backed font collections (made by FontLab https://www.fontlab.com/)
//!
//! Walks directory roots, reads the `name` table of every font file it
//! finds, and assembles a [`MemoryCollection`] the extraction core can
//! interrogate like any other platform collection. Families are keyed and
//! ordered by family name, so family indices are stable across runs over
//! an unchanged tree.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use read_fonts::tables::name::NameId;
use read_fonts::{FontRef, TableProvider};
use walkdir::WalkDir;

use crate::collection::{MemoryCollection, MemoryFamily, MemoryFont, MemoryNames};

/// Options for building a collection from filesystem roots.
#[derive(Debug, Default, Clone)]
pub struct ScanOptions {
    pub follow_symlinks: bool,
}

struct ScannedFace {
    family_key: String,
    family_names: MemoryNames,
    font: MemoryFont,
}

/// Walk `roots` and build a collection from every font file found.
///
/// A root that does not exist is an error; an individual file that fails
/// to parse is logged and skipped, never fatal. Scanned faces are always
/// authored files, so none of them report as simulated.
pub fn scan_collection(roots: &[PathBuf], opts: &ScanOptions) -> Result<MemoryCollection> {
    let files = discover_files(roots, opts.follow_symlinks)?;

    let mut families: BTreeMap<String, MemoryFamily> = BTreeMap::new();
    for path in &files {
        match read_faces(path) {
            Ok(faces) => {
                for face in faces {
                    families
                        .entry(face.family_key)
                        .or_insert_with(|| MemoryFamily::new(face.family_names))
                        .fonts
                        .push(face.font);
                }
            }
            Err(err) => log::debug!("skipping {}: {err:#}", path.display()),
        }
    }

    Ok(MemoryCollection::new(families.into_values().collect()))
}

/// Collect candidate font files beneath `roots`, sorted for determinism.
pub fn discover_files(roots: &[PathBuf], follow_symlinks: bool) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for root in roots {
        if !root.exists() {
            return Err(anyhow!("root path does not exist: {}", root.display()));
        }

        for entry in WalkDir::new(root).follow_links(follow_symlinks) {
            let entry = entry?;
            if entry.file_type().is_file() && is_font(entry.path()) {
                found.push(entry.path().to_path_buf());
            }
        }
    }

    found.sort();
    found.dedup();
    Ok(found)
}

fn is_font(path: &Path) -> bool {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.to_ascii_lowercase(),
        None => return false,
    };

    matches!(ext.as_str(), "ttf" | "otf" | "ttc" | "otc")
}

fn read_faces(path: &Path) -> Result<Vec<ScannedFace>> {
    let data = fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
    let mut faces = Vec::new();

    for font in FontRef::fonts(&data) {
        let font = font?;
        match scan_face(&font) {
            Some(face) => faces.push(face),
            None => log::debug!("face without a family name in {}", path.display()),
        }
    }

    Ok(faces)
}

fn scan_face(font: &FontRef) -> Option<ScannedFace> {
    let family_names = name_table_for(
        font,
        &[NameId::TYPOGRAPHIC_FAMILY_NAME, NameId::FAMILY_NAME],
    );
    let family_key = family_names.default_value()?.to_string();

    let postscript_names = name_table_for(font, &[NameId::POSTSCRIPT_NAME]);
    let full_names = name_table_for(font, &[NameId::FULL_NAME]);

    Some(ScannedFace {
        family_key,
        family_names,
        font: MemoryFont {
            simulated: false,
            postscript_names: (!postscript_names.is_empty()).then_some(postscript_names),
            full_names: (!full_names.is_empty()).then_some(full_names),
        },
    })
}

/// Build a locale-tagged name table from the first of `ids` that yields
/// any usable Unicode records. The first record seen becomes the default
/// entry, the way the platform's native slot would.
fn name_table_for(font: &FontRef, ids: &[NameId]) -> MemoryNames {
    let mut table = MemoryNames::new();
    let Ok(name) = font.name() else {
        return table;
    };
    let data = name.string_data();

    for id in ids {
        for record in name.name_record() {
            if record.name_id() != *id || !record.is_unicode() {
                continue;
            }
            let Ok(entry) = record.string(data) else {
                continue;
            };
            let value = entry.to_string();
            if value.trim().is_empty() {
                continue;
            }

            if table.default_value().is_none() {
                table.set_default(value.clone());
            }
            if let Some(locale) = locale_tag(record.platform_id(), record.language_id()) {
                table.push_localized(locale, value);
            }
        }

        if !table.is_empty() {
            break;
        }
    }

    table
}

// Windows-platform language IDs for the locales the resolver's fallback
// chains care about. Records from other platforms land in the default
// slot only.
fn locale_tag(platform_id: u16, language_id: u16) -> Option<&'static str> {
    if platform_id != 3 {
        return None;
    }

    match language_id {
        0x0409 => Some("en-us"),
        0x0809 => Some("en-gb"),
        0x040C => Some("fr-fr"),
        0x0407 => Some("de-de"),
        0x0411 => Some("ja-jp"),
        0x0412 => Some("ko-kr"),
        0x0804 => Some("zh-cn"),
        0x0404 => Some("zh-tw"),
        _ => None,
    }
}

/// Platform default font directories, overridable with the
/// `TYPN_SYSTEM_FONT_DIRS` env var (paths split on `:` or `;`).
pub fn system_font_roots() -> Result<Vec<PathBuf>> {
    if let Ok(raw) = env::var("TYPN_SYSTEM_FONT_DIRS") {
        let mut overrides: Vec<PathBuf> = raw
            .split([':', ';'])
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .filter(|p| p.exists())
            .collect();

        overrides.sort();
        overrides.dedup();

        return if overrides.is_empty() {
            Err(anyhow!("TYPN_SYSTEM_FONT_DIRS is set but no paths exist"))
        } else {
            Ok(overrides)
        };
    }

    let mut candidates: Vec<PathBuf> = Vec::new();

    #[cfg(target_os = "macos")]
    {
        candidates.push(PathBuf::from("/System/Library/Fonts"));
        candidates.push(PathBuf::from("/Library/Fonts"));
        if let Some(home) = env::var_os("HOME") {
            candidates.push(PathBuf::from(home).join("Library/Fonts"));
        }
    }

    #[cfg(target_os = "linux")]
    {
        candidates.push(PathBuf::from("/usr/share/fonts"));
        candidates.push(PathBuf::from("/usr/local/share/fonts"));
        if let Some(home) = env::var_os("HOME") {
            candidates.push(PathBuf::from(home).join(".local/share/fonts"));
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(system_root) = env::var_os("SYSTEMROOT") {
            candidates.push(PathBuf::from(system_root).join("Fonts"));
        }
        if let Some(local_appdata) = env::var_os("LOCALAPPDATA") {
            candidates.push(PathBuf::from(local_appdata).join("Microsoft/Windows/Fonts"));
        }
    }

    candidates.retain(|p| p.exists());
    candidates.sort();
    candidates.dedup();

    if candidates.is_empty() {
        return Err(anyhow!(
            "no system font directories found for this platform"
        ));
    }

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::is_font;

    #[test]
    fn recognises_font_extensions() {
        assert!(is_font("/A/B/font.ttf".as_ref()));
        assert!(is_font("/A/B/font.OTF".as_ref()));
        assert!(is_font("/A/B/collection.ttc".as_ref()));
        assert!(!is_font("/A/B/font.txt".as_ref()));
        assert!(!is_font("/A/B/font".as_ref()));
    }

    #[test]
    fn windows_locale_ids_map_to_tags() {
        assert_eq!(super::locale_tag(3, 0x0409), Some("en-us"));
        assert_eq!(super::locale_tag(3, 0x040C), Some("fr-fr"));
        assert_eq!(super::locale_tag(3, 0xFFFF), None);
        assert_eq!(super::locale_tag(0, 0x0409), None);
    }
}
