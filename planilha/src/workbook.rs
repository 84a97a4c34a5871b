//! Lecture de la première feuille d'un classeur (xlsx, xls, xlsb, ods)

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use tracing::{debug, info};

use crate::types::{Cell, Sheet};
use crate::PlanilhaError;

/// Charge la première feuille en mémoire
///
/// Les positions sont absolues : si la zone utilisée commence en C4, les
/// lignes 1 à 3 et les colonnes A et B sont remplies de cellules vides.
pub fn read_first_sheet(path: &Path) -> Result<Sheet, PlanilhaError> {
    if !path.exists() {
        return Err(PlanilhaError::MissingInput(path.to_path_buf()));
    }

    let mut workbook = open_workbook_auto(path)?;
    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(PlanilhaError::EmptyWorkbook)?;

    let range = workbook.worksheet_range(&name)?;

    let (start_row, start_col) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));
    debug!(sheet = %name, start_row, start_col, size = ?range.get_size(), "Used range");

    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); start_row];
    for row in range.rows() {
        let mut cells = vec![Cell::Empty; start_col];
        cells.extend(row.iter().map(convert_cell));
        rows.push(cells);
    }

    info!(sheet = %name, rows = rows.len(), "Workbook loaded");

    Ok(Sheet::new(name, rows))
}

/// Convertit une cellule calamine
pub fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(n) => Cell::Number(*n),
        Data::Int(n) => Cell::Int(*n),
        Data::Bool(b) => Cell::Bool(*b),
        Data::Error(e) => Cell::Error(e.to_string()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => Cell::Date(naive.format("%Y-%m-%d %H:%M:%S").to_string()),
            None => Cell::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Date(s.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::CellErrorType;

    #[test]
    fn test_read_missing_file() {
        let result = read_first_sheet(Path::new("nonexistent.xlsx"));
        assert!(matches!(result, Err(PlanilhaError::MissingInput(_))));
    }

    #[test]
    fn test_convert_cell() {
        assert_eq!(convert_cell(&Data::Empty), Cell::Empty);
        assert_eq!(convert_cell(&Data::String("Nome".into())), Cell::from("Nome"));
        assert_eq!(convert_cell(&Data::Float(38.7)), Cell::Number(38.7));
        assert_eq!(convert_cell(&Data::Int(3)), Cell::Int(3));
        assert_eq!(convert_cell(&Data::Bool(false)), Cell::Bool(false));
        assert_eq!(
            convert_cell(&Data::Error(CellErrorType::Div0)),
            Cell::Error("#DIV/0!".into())
        );
    }
}
