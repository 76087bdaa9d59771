//! Main exporter service that ties all components together.

use std::path::Path;

use crate::config::{validate_base_iri, CONVENTIONS_SHEET, VERSION_SHEET};
use crate::conventions::extract_rules;
use crate::error::Result;
use crate::types::RuleSet;
use crate::version::extract_version;
use crate::workbook::{open_xlsx, optional_sheet, require_sheet};

/// Read a convention workbook and build the exportable rule set.
///
/// # Arguments
/// * `input` - Path to the .xlsx workbook
/// * `base_iri` - Base IRI prepended to every identifier suffix
///
/// # Returns
/// A `RuleSet` with the version marker, the exported rules, and any warnings
/// collected during extraction
pub fn export_rules(input: &Path, base_iri: &str) -> Result<RuleSet> {
    // Validate inputs
    validate_base_iri(base_iri)?;

    // Open the workbook (existence is checked first)
    let mut workbook = open_xlsx(input)?;

    // The version sheet is optional; the conventions sheet is not
    let version_sheet = optional_sheet(&mut workbook, VERSION_SHEET)?;
    let (latest_rule_version, version_warning) = extract_version(version_sheet.as_ref());

    let conventions = require_sheet(&mut workbook, CONVENTIONS_SHEET, input)?;
    let (rules, skipped_rows, mut warnings) = extract_rules(&conventions, base_iri);

    if let Some(warning) = version_warning {
        warnings.insert(0, warning);
    }

    Ok(RuleSet {
        latest_rule_version,
        rules,
        skipped_rows,
        warnings,
    })
}
