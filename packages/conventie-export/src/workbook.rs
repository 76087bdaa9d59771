//! Workbook access helpers built on calamine.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook, Data, Range, Reader, Xlsx};

use crate::error::{ExportError, Result};

/// Workbook reader type used throughout the exporter.
pub type XlsxFile = Xlsx<BufReader<File>>;

/// Open an .xlsx workbook from disk.
///
/// Checks existence first so a missing file reports a clear error instead of
/// a generic failure from the zip layer.
pub fn open_xlsx(path: &Path) -> Result<XlsxFile> {
    if !path.exists() {
        return Err(ExportError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(open_workbook(path)?)
}

/// Load a worksheet by exact name, failing if it is absent.
pub fn require_sheet(workbook: &mut XlsxFile, sheet: &str, path: &Path) -> Result<Range<Data>> {
    if !has_sheet(workbook, sheet) {
        return Err(ExportError::SheetMissing {
            sheet: sheet.to_string(),
            file: file_name(path),
        });
    }
    Ok(workbook.worksheet_range(sheet)?)
}

/// Load a worksheet by exact name, returning `None` if it is absent.
pub fn optional_sheet(workbook: &mut XlsxFile, sheet: &str) -> Result<Option<Range<Data>>> {
    if !has_sheet(workbook, sheet) {
        return Ok(None);
    }
    Ok(Some(workbook.worksheet_range(sheet)?))
}

/// Check for a worksheet by exact name.
fn has_sheet(workbook: &XlsxFile, sheet: &str) -> bool {
    workbook.sheet_names().iter().any(|s| s == sheet)
}

/// File name component for error messages.
fn file_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Normalize a cell to trimmed text.
///
/// Numeric cells render through their std `Display` (so `42.0` becomes
/// `"42"`), error cells and empty cells become the empty string.
#[must_use]
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
        Data::Error(_) | Data::Empty => String::new(),
    }
}

/// Read the cell at an absolute 0-based (row, column) position as trimmed text.
///
/// `Range::get_value` takes absolute coordinates, so the lookup stays correct
/// even when a sheet's used range does not start at A1. Positions outside the
/// used range normalize to the empty string.
#[must_use]
pub fn cell_at(range: &Range<Data>, row: u32, col: u32) -> String {
    range.get_value((row, col)).map_or_else(String::new, cell_text)
}
