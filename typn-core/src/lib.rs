/// typn-core: The patient census-taker of installed fonts
///
/// Every font on a system has three names it answers to - its PostScript
/// name, its full display name, and the family it belongs to. This library
/// knocks on every family's door, writes those names down, and hands you
/// one tidy report. Nothing more, nothing less.
///
/// ## How a census gets taken
///
/// **Collection**: a platform font collection is an opaque capability -
/// "give me family number seven" - modelled here as a small set of traits
/// so the extraction core never cares whether the families came from a
/// native font service, a directory scan, or a test fixture.
///
/// **Extraction**: each family is interviewed independently. A family
/// either yields a complete set of records or none at all - partial,
/// half-resolved families are not worth reporting.
///
/// **Dispatch**: families are independent, so they are interviewed on a
/// fixed-size worker pool. Results come back in family order no matter
/// how many workers you hire.
///
/// ## A short conversation
///
/// ```rust,no_run
/// use typn_core::dispatch::run_all;
/// use typn_core::scan::{scan_collection, system_font_roots, ScanOptions};
///
/// let roots = system_font_roots()?;
/// let collection = scan_collection(&roots, &ScanOptions::default())?;
/// let report = run_all(&collection, 4)?;
///
/// println!("{} fonts on this machine", report.stats.num_fonts);
/// for font in &report.fonts {
///     println!("  {} ({})", font.full_name, font.postscript_name);
/// }
/// #
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// ## The cast of characters
///
/// - [`collection::FontCollection`]: the door to the font kingdom
/// - [`extract::FontMetadata`]: the three names of one font face
/// - [`dispatch::AggregateReport`]: the finished census, ready for JSON
///
/// ---
///
/// Crafted with care at FontLab https://www.fontlab.com/
pub mod collection;
pub mod dispatch;
pub mod error;
pub mod extract;
pub mod names;
pub mod output;
pub mod scan;
