/// Interviewing one family at a time
///
/// The extractor's contract is all-or-nothing: a family either hands over
/// a complete, well-named set of records or it hands over nothing. These
/// tests walk every branch of that policy - skipped simulations, missing
/// name tables, names that refuse to resolve, and platform handles that
/// fail mid-family.
use std::sync::Arc;

use typn_core::collection::{
    FamilyHandle, FontCollection, FontHandle, MemoryCollection, MemoryFamily, MemoryFont,
    MemoryNames,
};
use typn_core::error::{FamilyError, PlatformError};
use typn_core::extract::extract_family;

fn plain_font(postscript: &str, full: &str) -> MemoryFont {
    MemoryFont {
        simulated: false,
        postscript_names: Some(MemoryNames::with_default(postscript)),
        full_names: Some(MemoryNames::with_default(full).localized("en-us", full)),
    }
}

fn family_named(name: &str, fonts: Vec<MemoryFont>) -> MemoryFamily {
    MemoryFamily {
        names: MemoryNames::with_default(name).localized("en-us", name),
        fonts,
    }
}

fn single_family(family: MemoryFamily) -> MemoryCollection {
    MemoryCollection::new(vec![family])
}

#[test]
fn extracts_every_authored_face_in_font_index_order() {
    let collection = single_family(family_named(
        "Arial",
        vec![
            plain_font("Arial-Regular", "Arial"),
            plain_font("Arial-Bold", "Arial Bold"),
        ],
    ));

    let fonts = extract_family(&collection, 0).expect("extract");

    assert_eq!(fonts.len(), 2);
    assert_eq!(fonts[0].postscript_name, "Arial-Regular");
    assert_eq!(fonts[0].full_name, "Arial");
    assert_eq!(fonts[0].family, "Arial");
    assert_eq!(fonts[1].postscript_name, "Arial-Bold");
}

#[test]
fn simulated_faces_are_skipped_without_failing_the_family() {
    let mut simulated = plain_font("Arial-BoldSim", "Arial Bold Simulated");
    simulated.simulated = true;

    let collection = single_family(family_named(
        "Arial",
        vec![simulated, plain_font("Arial-Regular", "Arial")],
    ));

    let fonts = extract_family(&collection, 0).expect("extract");

    assert_eq!(fonts.len(), 1);
    assert_eq!(fonts[0].postscript_name, "Arial-Regular");
}

#[test]
fn family_of_only_simulated_faces_succeeds_with_no_records() {
    let mut simulated = plain_font("Arial-BoldSim", "Arial Bold Simulated");
    simulated.simulated = true;

    let collection = single_family(family_named("Arial", vec![simulated]));

    let fonts = extract_family(&collection, 0).expect("extract");
    assert!(fonts.is_empty());
}

#[test]
fn missing_postscript_table_aborts_the_whole_family() {
    let mut bad = plain_font("Arial-Bold", "Arial Bold");
    bad.postscript_names = None;

    // The good face at index 0 must be discarded along with the family.
    let collection = single_family(family_named(
        "Arial",
        vec![plain_font("Arial-Regular", "Arial"), bad],
    ));

    let result = extract_family(&collection, 0);
    assert_eq!(result, Err(FamilyError::NoFullNameOrPostScriptName));
}

#[test]
fn unresolvable_postscript_table_aborts_the_family() {
    let mut bad = plain_font("Arial-Regular", "Arial");
    bad.postscript_names = Some(MemoryNames::new().localized("fr-fr", "Arial-Gras"));

    let collection = single_family(family_named("Arial", vec![bad]));

    let result = extract_family(&collection, 0);
    assert_eq!(result, Err(FamilyError::NoFullNameOrPostScriptName));
}

#[test]
fn missing_full_name_table_aborts_the_family() {
    let mut bad = plain_font("Arial-Regular", "Arial");
    bad.full_names = None;

    let collection = single_family(family_named("Arial", vec![bad]));

    let result = extract_family(&collection, 0);
    assert_eq!(result, Err(FamilyError::NoFullNameOrPostScriptName));
}

#[test]
fn unresolvable_full_name_falls_back_to_postscript_name() {
    let mut font = plain_font("Arial-Regular", "Arial");
    font.full_names = Some(MemoryNames::new().localized("fr-fr", "Arial Romain"));

    let collection = single_family(family_named("Arial", vec![font]));

    let fonts = extract_family(&collection, 0).expect("extract");
    assert_eq!(fonts[0].full_name, "Arial-Regular");
}

#[test]
fn family_name_prefers_the_english_entry() {
    let family = MemoryFamily {
        names: MemoryNames::with_default("メイリオ").localized("en-us", "Meiryo"),
        fonts: vec![plain_font("Meiryo-Regular", "Meiryo")],
    };

    let fonts = extract_family(&single_family(family), 0).expect("extract");
    assert_eq!(fonts[0].family, "Meiryo");
}

#[test]
fn family_name_falls_back_to_native_when_english_is_absent() {
    let family = MemoryFamily {
        names: MemoryNames::with_default("メイリオ"),
        fonts: vec![plain_font("Meiryo-Regular", "Meiryo")],
    };

    let fonts = extract_family(&single_family(family), 0).expect("extract");
    assert_eq!(fonts[0].family, "メイリオ");
}

#[test]
fn family_without_any_usable_name_is_terminal() {
    let family = MemoryFamily {
        names: MemoryNames::new(),
        fonts: vec![plain_font("Mystery-Regular", "Mystery")],
    };

    let result = extract_family(&single_family(family), 0);
    assert_eq!(result, Err(FamilyError::NoFamilyName));
}

struct BrokenCollection;

impl FontCollection for BrokenCollection {
    fn family_count(&self) -> usize {
        1
    }

    fn family(&self, _index: usize) -> Result<Arc<dyn FamilyHandle>, PlatformError> {
        Err(PlatformError::with_code("GetFontFamily failed", -0x7FF8_FFF2i32))
    }
}

#[test]
fn family_handle_failure_propagates_as_acquisition_error() {
    let result = extract_family(&BrokenCollection, 0);
    assert!(matches!(
        result,
        Err(FamilyError::FamilyAcquisitionFailed(_))
    ));
}

struct FlakyFamily {
    names: MemoryNames,
    first: MemoryFont,
}

impl FamilyHandle for FlakyFamily {
    fn names(&self) -> Result<Arc<dyn typn_core::collection::NameTable>, PlatformError> {
        Ok(Arc::new(self.names.clone()))
    }

    fn font_count(&self) -> usize {
        2
    }

    fn font(&self, index: usize) -> Result<Arc<dyn FontHandle>, PlatformError> {
        match index {
            0 => Ok(Arc::new(self.first.clone()) as Arc<dyn FontHandle>),
            _ => Err(PlatformError::new("GetFont failed")),
        }
    }
}

struct OneFamily(Arc<dyn FamilyHandle>);

impl FontCollection for OneFamily {
    fn family_count(&self) -> usize {
        1
    }

    fn family(&self, index: usize) -> Result<Arc<dyn FamilyHandle>, PlatformError> {
        if index == 0 {
            Ok(Arc::clone(&self.0))
        } else {
            Err(PlatformError::new(format!("family index {index} out of range")))
        }
    }
}

#[test]
fn font_handle_failure_discards_records_already_collected() {
    let collection = OneFamily(Arc::new(FlakyFamily {
        names: MemoryNames::with_default("Arial"),
        first: plain_font("Arial-Regular", "Arial"),
    }));

    let result = extract_family(&collection, 0);
    assert!(matches!(
        result,
        Err(FamilyError::FamilyAcquisitionFailed(_))
    ));
}
