//! Rule-version marker extraction.
//!
//! The version sheet carries a single marker cell (B1) naming the latest
//! toetsingsregel version. The sheet is optional: workbooks without it
//! export an empty marker.

use calamine::{Data, Range};

use crate::config::{VERSION_CELL, VERSION_SHEET};
use crate::workbook::cell_at;

/// Read the rule-version marker from the version sheet.
///
/// # Arguments
/// * `sheet` - The version sheet range, or `None` when the sheet is absent
///
/// # Returns
/// `(marker, warning)` where the marker is the trimmed B1 text (empty when
/// the sheet or cell is absent) and the warning flags a present sheet whose
/// marker cell is blank.
#[must_use]
pub fn extract_version(sheet: Option<&Range<Data>>) -> (String, Option<String>) {
    let Some(range) = sheet else {
        return (String::new(), None);
    };

    let latest = cell_at(range, VERSION_CELL.0, VERSION_CELL.1);
    if latest.is_empty() {
        let warning = format!("Sheet '{VERSION_SHEET}' is present but cell B1 is empty");
        (latest, Some(warning))
    } else {
        (latest, None)
    }
}
