//! Convention rule extraction from the conventions sheet.
//!
//! The sheet starts with a header row, followed by one rule per row in
//! columns B through I. Column A is not exported.

use calamine::{Data, Range};
use regex::Regex;

use crate::config::{
    build_iri, COL_AAS_OPBOUW, COL_AAS_REGEX, COL_AAS_VOORBEELD, COL_IRI_SUFFIX,
    COL_OBJECT_ID_REQUIRED, COL_OMSCHRIJVING_TEMPLATE, COL_OMSCHRIJVING_UITLEG,
    COL_OMSCHRIJVING_VOORBEELD, FIRST_DATA_ROW,
};
use crate::types::RuleRecord;
use crate::workbook::cell_at;

/// Extract rule records from the conventions sheet.
///
/// Row 1 is the header and is never read. A data row is exported only when
/// both the identifier suffix and the regex are non-empty after trimming;
/// other rows are skipped and counted.
///
/// Returns `(rules, skipped, warnings)` where warnings are non-fatal issues
/// in exported rows.
#[must_use]
pub fn extract_rules(sheet: &Range<Data>, base_iri: &str) -> (Vec<RuleRecord>, usize, Vec<String>) {
    let mut rules = Vec::new();
    let mut warnings: Vec<String> = Vec::new();
    let mut skipped = 0usize;

    let Some((end_row, _)) = sheet.end() else {
        return (rules, skipped, warnings);
    };

    for row in FIRST_DATA_ROW..=end_row {
        let iri_suffix = cell_at(sheet, row, COL_IRI_SUFFIX);
        let aas_regex = cell_at(sheet, row, COL_AAS_REGEX);

        // Rows without a suffix or regex carry no enforceable rule
        if iri_suffix.is_empty() || aas_regex.is_empty() {
            skipped += 1;
            tracing::debug!(row = row + 1, "Row skipped: no identifier suffix or regex");
            continue;
        }

        let sheet_row = row + 1;

        // Consumers compile these patterns, so flag broken ones at export time
        if let Err(e) = Regex::new(&aas_regex) {
            warnings.push(format!("Row {sheet_row}: aasRegex does not compile: {e}"));
        }

        rules.push(RuleRecord {
            iri: build_iri(base_iri, &iri_suffix),
            object_id_required: is_ja(&cell_at(sheet, row, COL_OBJECT_ID_REQUIRED)),
            aas_regex,
            aas_opbouw: cell_at(sheet, row, COL_AAS_OPBOUW),
            aas_voorbeeld: cell_at(sheet, row, COL_AAS_VOORBEELD),
            omschrijving_template: cell_at(sheet, row, COL_OMSCHRIJVING_TEMPLATE),
            omschrijving_uitleg: cell_at(sheet, row, COL_OMSCHRIJVING_UITLEG),
            omschrijving_voorbeeld: cell_at(sheet, row, COL_OMSCHRIJVING_VOORBEELD),
            row: sheet_row,
        });
    }

    (rules, skipped, warnings)
}

/// Interpret a ja/nee flag cell. Only a case-insensitive "ja" counts as true.
fn is_ja(text: &str) -> bool {
    text.eq_ignore_ascii_case("ja")
}
