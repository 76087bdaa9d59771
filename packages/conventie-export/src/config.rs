//! Configuration constants and validation functions for the exporter.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ExportError, Result};

/// Default base IRI prepended to every identifier suffix.
pub const DEFAULT_BASE_IRI: &str = "https://dds.schiphol.nl/asset/";

/// Worksheet holding the convention rules.
pub const CONVENTIONS_SHEET: &str = "Conventies";

/// Worksheet holding the rule version marker.
pub const VERSION_SHEET: &str = "Versie toetsingsregel";

/// Version marker cell (B1), 0-based (row, column).
pub const VERSION_CELL: (u32, u32) = (0, 1);

/// First data row on the conventions sheet, 0-based. Row 1 is the header.
pub const FIRST_DATA_ROW: u32 = 1;

/// Conventions sheet column (0-based): identifier suffix appended to the base IRI.
pub const COL_IRI_SUFFIX: u32 = 1;

/// Conventions sheet column (0-based): ja/nee flag for mandatory object IDs.
pub const COL_OBJECT_ID_REQUIRED: u32 = 2;

/// Conventions sheet column (0-based): validation regex for AAS codes.
pub const COL_AAS_REGEX: u32 = 3;

/// Conventions sheet column (0-based): structure of the AAS code.
pub const COL_AAS_OPBOUW: u32 = 4;

/// Conventions sheet column (0-based): example AAS code.
pub const COL_AAS_VOORBEELD: u32 = 5;

/// Conventions sheet column (0-based): template for object descriptions.
pub const COL_OMSCHRIJVING_TEMPLATE: u32 = 6;

/// Conventions sheet column (0-based): explanation of the description template.
pub const COL_OMSCHRIJVING_UITLEG: u32 = 7;

/// Conventions sheet column (0-based): example description.
pub const COL_OMSCHRIJVING_VOORBEELD: u32 = 8;

/// Base IRI pattern: absolute http(s) IRI without whitespace.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static BASE_IRI_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://\S+$").expect("valid regex"));

/// Validate a base IRI.
///
/// # Arguments
/// * `base_iri` - The base IRI to validate
///
/// # Returns
/// * `Ok(())` if valid
/// * `Err(ExportError::InvalidBaseIri)` if invalid
///
/// # Examples
/// ```
/// use dds_conventie_export::config::validate_base_iri;
///
/// assert!(validate_base_iri("https://dds.schiphol.nl/asset/").is_ok());
/// assert!(validate_base_iri("asset/").is_err());
/// ```
pub fn validate_base_iri(base_iri: &str) -> Result<()> {
    if BASE_IRI_PATTERN.is_match(base_iri) {
        Ok(())
    } else {
        Err(ExportError::InvalidBaseIri(base_iri.to_string()))
    }
}

/// Build the full IRI for an identifier suffix.
///
/// The base is used verbatim; no separator is inserted between base and suffix.
///
/// # Arguments
/// * `base_iri` - The base IRI (should be validated with `validate_base_iri` first)
/// * `suffix` - Trimmed identifier suffix from the conventions sheet
///
/// # Returns
/// The concatenated IRI
///
/// # Panics
/// Debug builds panic if base_iri doesn't match the expected format.
#[must_use]
pub fn build_iri(base_iri: &str, suffix: &str) -> String {
    debug_assert!(
        BASE_IRI_PATTERN.is_match(base_iri),
        "base_iri should be validated before calling build_iri"
    );
    format!("{base_iri}{suffix}")
}
