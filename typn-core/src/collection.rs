//! Platform font-collection capability (made by FontLab https://www.fontlab.com/)
//!
//! The extraction core talks to fonts through these traits only. A
//! collection hands out family handles, a family hands out fonts and its
//! name table, and every operation is synchronous and fallible with a
//! [`PlatformError`]. The in-memory types at the bottom are the concrete
//! model produced by [`crate::scan`] and the fixture type for tests and
//! benches.

use std::sync::Arc;

use crate::error::PlatformError;

/// Which informational string table to fetch from a font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoStringId {
    PostscriptName,
    FullName,
}

/// Locale-indexed table of human-readable strings.
///
/// Entry 0 is the table's default/native entry; localized entries follow.
pub trait NameTable: Send + Sync {
    /// Index of the entry tagged with `locale`, if the table carries one.
    fn find_locale(&self, locale: &str) -> Result<Option<usize>, PlatformError>;

    /// Number of entries in the table.
    fn entry_count(&self) -> Result<usize, PlatformError>;

    /// Fetch the string at `index`.
    fn entry(&self, index: usize) -> Result<String, PlatformError>;
}

/// One font face within a family.
pub trait FontHandle: Send + Sync {
    /// Whether this face is synthesized (faux bold/italic) rather than an
    /// authored design file.
    fn is_simulated(&self) -> bool;

    /// Fetch an informational string table. `Ok(None)` means the font does
    /// not carry that table, which is distinct from a fetch failure.
    fn info_strings(&self, id: InfoStringId)
        -> Result<Option<Arc<dyn NameTable>>, PlatformError>;
}

/// A named group of related font faces.
pub trait FamilyHandle: Send + Sync {
    /// The family's localized name table.
    fn names(&self) -> Result<Arc<dyn NameTable>, PlatformError>;

    fn font_count(&self) -> usize;

    fn font(&self, index: usize) -> Result<Arc<dyn FontHandle>, PlatformError>;
}

/// A read-only set of font families, safe to share across worker threads.
pub trait FontCollection: Send + Sync {
    fn family_count(&self) -> usize;

    fn family(&self, index: usize) -> Result<Arc<dyn FamilyHandle>, PlatformError>;
}

/// Name table held fully in memory.
///
/// The default entry occupies index 0 when present; localized entries sit
/// at indices 1 and up, in insertion order. A table may carry localized
/// entries and still have no default, in which case entry 0 fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryNames {
    default: Option<String>,
    localized: Vec<(String, String)>,
}

impl MemoryNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default(value: impl Into<String>) -> Self {
        Self {
            default: Some(value.into()),
            localized: Vec::new(),
        }
    }

    pub fn localized(mut self, locale: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_localized(locale, value);
        self
    }

    pub fn set_default(&mut self, value: impl Into<String>) {
        self.default = Some(value.into());
    }

    pub fn push_localized(&mut self, locale: impl Into<String>, value: impl Into<String>) {
        self.localized.push((locale.into(), value.into()));
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.default.is_none() && self.localized.is_empty()
    }
}

impl NameTable for MemoryNames {
    fn find_locale(&self, locale: &str) -> Result<Option<usize>, PlatformError> {
        Ok(self
            .localized
            .iter()
            .position(|(tag, _)| tag.eq_ignore_ascii_case(locale))
            .map(|pos| pos + 1))
    }

    fn entry_count(&self) -> Result<usize, PlatformError> {
        Ok(self.localized.len() + usize::from(self.default.is_some()))
    }

    fn entry(&self, index: usize) -> Result<String, PlatformError> {
        if index == 0 {
            return self
                .default
                .clone()
                .ok_or_else(|| PlatformError::new("name table has no default entry"));
        }
        self.localized
            .get(index - 1)
            .map(|(_, value)| value.clone())
            .ok_or_else(|| PlatformError::new(format!("name entry {index} out of range")))
    }
}

/// One in-memory font face.
#[derive(Debug, Clone, Default)]
pub struct MemoryFont {
    pub simulated: bool,
    /// `None` models a font without a PostScript-name table.
    pub postscript_names: Option<MemoryNames>,
    /// `None` models a font without a full-name table.
    pub full_names: Option<MemoryNames>,
}

impl FontHandle for MemoryFont {
    fn is_simulated(&self) -> bool {
        self.simulated
    }

    fn info_strings(
        &self,
        id: InfoStringId,
    ) -> Result<Option<Arc<dyn NameTable>>, PlatformError> {
        let table = match id {
            InfoStringId::PostscriptName => &self.postscript_names,
            InfoStringId::FullName => &self.full_names,
        };
        Ok(table
            .clone()
            .map(|names| Arc::new(names) as Arc<dyn NameTable>))
    }
}

/// One in-memory family: a name table plus its faces in index order.
#[derive(Debug, Clone, Default)]
pub struct MemoryFamily {
    pub names: MemoryNames,
    pub fonts: Vec<MemoryFont>,
}

impl MemoryFamily {
    pub fn new(names: MemoryNames) -> Self {
        Self {
            names,
            fonts: Vec::new(),
        }
    }
}

impl FamilyHandle for MemoryFamily {
    fn names(&self) -> Result<Arc<dyn NameTable>, PlatformError> {
        Ok(Arc::new(self.names.clone()))
    }

    fn font_count(&self) -> usize {
        self.fonts.len()
    }

    fn font(&self, index: usize) -> Result<Arc<dyn FontHandle>, PlatformError> {
        self.fonts
            .get(index)
            .cloned()
            .map(|font| Arc::new(font) as Arc<dyn FontHandle>)
            .ok_or_else(|| PlatformError::new(format!("font index {index} out of range")))
    }
}

/// In-memory collection of families, ordered by family index.
#[derive(Debug, Clone, Default)]
pub struct MemoryCollection {
    families: Vec<MemoryFamily>,
}

impl MemoryCollection {
    pub fn new(families: Vec<MemoryFamily>) -> Self {
        Self { families }
    }

    pub fn push_family(&mut self, family: MemoryFamily) {
        self.families.push(family);
    }
}

impl FontCollection for MemoryCollection {
    fn family_count(&self) -> usize {
        self.families.len()
    }

    fn family(&self, index: usize) -> Result<Arc<dyn FamilyHandle>, PlatformError> {
        self.families
            .get(index)
            .cloned()
            .map(|family| Arc::new(family) as Arc<dyn FamilyHandle>)
            .ok_or_else(|| PlatformError::new(format!("family index {index} out of range")))
    }
}
