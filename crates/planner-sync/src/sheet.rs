use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};

use crate::model::PlannerRecord;
use crate::process::{NAME_COLUMN, SHEET_NAME, URL_COLUMN};

/// Errors while reading the planner spreadsheet.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("could not open workbook {path}: {reason}")]
    Open { path: String, reason: String },

    #[error("workbook has no sheet named {0:?}")]
    MissingSheet(String),

    #[error("sheet {sheet:?} has no column named {column:?}")]
    MissingColumn { sheet: String, column: String },
}

/// Read the planner sheet into records, preserving row order.
///
/// The first row is the header; the name and URL columns are located by
/// name and every following row is projected into a [`PlannerRecord`].
/// Rows with an empty name cell are skipped. No further schema validation
/// is applied.
pub fn read_planner_sheet(path: &Path) -> Result<Vec<PlannerRecord>, SheetError> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e: calamine::XlsxError| SheetError::Open {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let range = workbook
        .worksheet_range(SHEET_NAME)
        .map_err(|_| SheetError::MissingSheet(SHEET_NAME.to_owned()))?;

    let mut rows = range.rows();
    let header = rows.next().unwrap_or(&[]);

    let name_col = find_column(header, NAME_COLUMN)?;
    let url_col = find_column(header, URL_COLUMN)?;

    let mut records = Vec::new();
    for row in rows {
        let Some(name) = row.get(name_col).and_then(cell_text) else {
            continue;
        };
        let url = row.get(url_col).and_then(cell_text).unwrap_or_default();
        records.push(PlannerRecord { name, url });
    }

    Ok(records)
}

fn find_column(header: &[Data], column: &str) -> Result<usize, SheetError> {
    header
        .iter()
        .position(|cell| cell_text(cell).as_deref() == Some(column))
        .ok_or_else(|| SheetError::MissingColumn {
            sheet: SHEET_NAME.to_owned(),
            column: column.to_owned(),
        })
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.trim().is_empty() => None,
        Data::String(s) => Some(s.trim().to_owned()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_text_trims_and_drops_blanks() {
        assert_eq!(cell_text(&Data::String(" Budget ".into())).as_deref(), Some("Budget"));
        assert_eq!(cell_text(&Data::String("   ".into())), None);
        assert_eq!(cell_text(&Data::Empty), None);
    }

    #[test]
    fn cell_text_renders_non_string_cells() {
        assert_eq!(cell_text(&Data::Int(7)).as_deref(), Some("7"));
    }
}
