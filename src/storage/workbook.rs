//! Excel workbook input.
//!
//! The dataset is read up-front into plain text cells: the analysis never
//! touches the file again, and any cell value (numbers, booleans, empties) is
//! coerced to its text representation so per-row processing cannot fail.

use std::path::{Path, PathBuf};

use calamine::{Reader, open_workbook_auto};

use crate::domain::Requirement;

/// Name of the column holding the requirement statements.
pub const TEXT_COLUMN: &str = "requirement_text";

/// Name of the optional identifier column.
pub const ID_COLUMN: &str = "id";

/// Errors raised while loading the input dataset.
///
/// All of these are fatal: the run aborts before any output is produced.
/// The messages for the user-facing cases keep the tool's French wording.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The input path does not exist.
    #[error("Fichier introuvable : {}", .0.display())]
    NotFound(PathBuf),

    /// The requested sheet name is not present in the workbook.
    #[error("Feuille introuvable : {0}")]
    SheetNotFound(String),

    /// The workbook contains no sheets at all.
    #[error("Le classeur ne contient aucune feuille")]
    EmptyWorkbook,

    /// The header row has no `requirement_text` column.
    #[error("La colonne 'requirement_text' est requise")]
    MissingTextColumn,

    /// The file could not be opened or parsed as a workbook.
    #[error(transparent)]
    Workbook(#[from] calamine::Error),
}

/// An input dataset: one header row plus text-coerced data rows.
///
/// The raw rows are retained so the report can echo them unchanged in its
/// second sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    text_column: usize,
    id_column: Option<usize>,
}

impl Dataset {
    /// The header row, in file order.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// The data rows, text-coerced, in file order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Extract the requirements, one per row, in file order.
    ///
    /// A missing or absent `id` cell yields an empty identifier rather than
    /// failing the row.
    #[must_use]
    pub fn requirements(&self) -> Vec<Requirement> {
        self.rows
            .iter()
            .map(|row| {
                let id = self
                    .id_column
                    .and_then(|column| row.get(column))
                    .cloned()
                    .unwrap_or_default();
                let text = row.get(self.text_column).cloned().unwrap_or_default();
                Requirement::new(id, text)
            })
            .collect()
    }
}

/// Read a dataset from an Excel workbook.
///
/// Reads the named sheet, or the first sheet when `sheet` is `None`. The
/// first row of the used range is taken as the header row.
///
/// # Errors
///
/// Returns a [`LoadError`] if the file does not exist, cannot be parsed, the
/// requested sheet is absent, or the `requirement_text` column is missing.
pub fn read(path: &Path, sheet: Option<&str>) -> Result<Dataset, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let mut workbook = open_workbook_auto(path)?;

    let sheet_name = match sheet {
        Some(name) => {
            if workbook.sheet_names().iter().any(|candidate| candidate == name) {
                name.to_string()
            } else {
                return Err(LoadError::SheetNotFound(name.to_string()));
            }
        }
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or(LoadError::EmptyWorkbook)?,
    };

    let range = workbook.worksheet_range(&sheet_name)?;
    let mut row_iter = range.rows();

    let headers: Vec<String> = row_iter
        .next()
        .map(|cells| cells.iter().map(ToString::to_string).collect())
        .unwrap_or_default();

    let text_column = headers
        .iter()
        .position(|header| header == TEXT_COLUMN)
        .ok_or(LoadError::MissingTextColumn)?;
    let id_column = headers.iter().position(|header| header == ID_COLUMN);

    let rows: Vec<Vec<String>> = row_iter
        .map(|cells| cells.iter().map(ToString::to_string).collect())
        .collect();

    tracing::debug!(sheet = %sheet_name, rows = rows.len(), "loaded input dataset");

    Ok(Dataset {
        headers,
        rows,
        text_column,
        id_column,
    })
}
