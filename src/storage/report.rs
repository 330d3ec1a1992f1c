//! Excel report output.
//!
//! Writes two sheets: `report` with the per-requirement findings, and
//! `input_sample` echoing the input rows unchanged for traceability.

use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::domain::Analysis;

use super::workbook::Dataset;

/// The report sheet columns, in order.
const REPORT_COLUMNS: [&str; 4] = ["id", "requirement_text", "issues", "suggested_rewrite"];

/// Error raised while writing the report workbook.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct WriteError(#[from] rust_xlsxwriter::XlsxError);

/// Write the analysis report to `path`.
///
/// The `report` sheet lists one row per requirement with its joined issue
/// labels and suggestion (empty strings when none); the `input_sample` sheet
/// repeats the input dataset.
///
/// # Errors
///
/// Returns a [`WriteError`] if the workbook cannot be assembled or saved.
pub fn write(path: &Path, analyses: &[Analysis], dataset: &Dataset) -> Result<(), WriteError> {
    let mut workbook = Workbook::new();

    let report = workbook.add_worksheet();
    report.set_name("report")?;
    for (col, header) in (0u16..).zip(REPORT_COLUMNS) {
        report.write_string(0, col, header)?;
    }
    for (row, analysis) in (1u32..).zip(analyses) {
        report.write_string(row, 0, &analysis.id)?;
        report.write_string(row, 1, &analysis.text)?;
        report.write_string(row, 2, analysis.issues_display())?;
        report.write_string(row, 3, analysis.suggestion.as_deref().unwrap_or_default())?;
    }

    let echo = workbook.add_worksheet();
    echo.set_name("input_sample")?;
    for (col, header) in (0u16..).zip(dataset.headers()) {
        echo.write_string(0, col, header)?;
    }
    for (row, cells) in (1u32..).zip(dataset.rows()) {
        for (col, cell) in (0u16..).zip(cells) {
            echo.write_string(row, col, cell)?;
        }
    }

    workbook.save(path)?;

    tracing::debug!(rows = analyses.len(), path = %path.display(), "report written");

    Ok(())
}

#[cfg(test)]
mod tests {
    use calamine::{Reader, open_workbook_auto};

    use super::write;
    use crate::{analysis::Analyzer, storage::workbook};

    #[test]
    fn report_has_both_sheets_with_expected_cells() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.xlsx");
        let output = dir.path().join("report.xlsx");

        let mut fixture = rust_xlsxwriter::Workbook::new();
        let sheet = fixture.add_worksheet();
        sheet.write_string(0, 0, "id").unwrap();
        sheet.write_string(0, 1, "requirement_text").unwrap();
        sheet.write_string(1, 0, "R1").unwrap();
        sheet
            .write_string(1, 1, "Le dispositif doit peser moins de 10.")
            .unwrap();
        sheet.write_string(2, 0, "R2").unwrap();
        sheet.write_string(2, 1, "Le bouton doit être rouge.").unwrap();
        fixture.save(&input).unwrap();

        let dataset = workbook::read(&input, None).unwrap();
        let analyses = Analyzer::new().analyze_all(&dataset.requirements());
        write(&output, &analyses, &dataset).unwrap();

        let mut report = open_workbook_auto(&output).unwrap();
        assert_eq!(report.sheet_names(), vec!["report", "input_sample"]);

        let range = report.worksheet_range("report").unwrap();
        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|cells| cells.iter().map(ToString::to_string).collect())
            .collect();

        assert_eq!(
            rows[0],
            vec!["id", "requirement_text", "issues", "suggested_rewrite"]
        );
        assert_eq!(rows[1][0], "R1");
        assert_eq!(rows[1][2], "UNIT_MISSING");
        assert_eq!(
            rows[1][3],
            "Ajouter les unités manquantes (ex.: V, A, W, °C, ms, kg, etc.)."
        );
        // Clean requirement: empty issue list and empty suggestion.
        assert_eq!(rows[2][2], "");
        assert_eq!(rows[2][3], "");

        let echo = report.worksheet_range("input_sample").unwrap();
        let echo_rows: Vec<Vec<String>> = echo
            .rows()
            .map(|cells| cells.iter().map(ToString::to_string).collect())
            .collect();
        assert_eq!(echo_rows[0], vec!["id", "requirement_text"]);
        assert_eq!(echo_rows[2][1], "Le bouton doit être rouge.");
    }
}
