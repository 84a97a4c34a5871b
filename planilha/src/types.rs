//! Types de données pour le crate planilha

use std::fmt;

/// Valeur brute d'une cellule, telle que lue dans le classeur
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Int(i64),
    Bool(bool),
    /// Date/heure déjà rendue en texte (`YYYY-MM-DD HH:MM:SS`)
    Date(String),
    /// Code d'erreur du tableur (`#DIV/0!`, `#N/A`...)
    Error(String),
}

impl Cell {
    /// Représentation texte de la cellule, `None` si elle est vide
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) | Cell::Date(s) | Cell::Error(s) => Some(s.clone()),
            Cell::Number(n) => Some(format_number(*n)),
            Cell::Int(n) => Some(n.to_string()),
            Cell::Bool(true) => Some("True".to_string()),
            Cell::Bool(false) => Some("False".to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

/// Les entiers stockés en flottant (cas courant dans les classeurs) sont
/// rendus sans partie décimale.
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Première feuille du classeur, en mémoire
///
/// `rows[0]` est la ligne 1 du tableur et la colonne 0 est la colonne A.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Ligne par numéro 1-based
    pub fn row(&self, number: usize) -> Option<&[Cell]> {
        number
            .checked_sub(1)
            .and_then(|i| self.rows.get(i))
            .map(Vec::as_slice)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// Raison pour laquelle une ligne de données est ignorée
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    EmptyName,
    InvalidLatitude,
    InvalidLongitude,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SkipReason::EmptyName => "empty name",
            SkipReason::InvalidLatitude => "invalid latitude",
            SkipReason::InvalidLongitude => "invalid longitude",
        })
    }
}

/// Ligne ignorée, avec son numéro dans le tableur
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub row: usize,
    pub reason: SkipReason,
}

/// Compteurs d'une exécution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Lignes de données lues sous l'en-tête
    pub rows_read: usize,
    /// Lignes ignorées (nom vide ou coordonnées invalides)
    pub rows_skipped: usize,
    /// Features générées
    pub features: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_as_text() {
        assert_eq!(Cell::Empty.as_text(), None);
        assert_eq!(Cell::from(" Alpha ").as_text().as_deref(), Some(" Alpha "));
        assert_eq!(Cell::Number(2025.0).as_text().as_deref(), Some("2025"));
        assert_eq!(Cell::Number(38.7).as_text().as_deref(), Some("38.7"));
        assert_eq!(Cell::Number(-9.1).as_text().as_deref(), Some("-9.1"));
        assert_eq!(Cell::Int(42).as_text().as_deref(), Some("42"));
        assert_eq!(Cell::Bool(true).as_text().as_deref(), Some("True"));
        assert_eq!(
            Cell::Number(f64::INFINITY).as_text().as_deref(),
            Some("inf")
        );
    }

    #[test]
    fn test_sheet_row_is_one_based() {
        let sheet = Sheet::new("S", vec![vec![Cell::from("a")], vec![Cell::from("b")]]);
        assert_eq!(sheet.row(0), None);
        assert_eq!(sheet.row(1), Some(&[Cell::from("a")][..]));
        assert_eq!(sheet.row(2), Some(&[Cell::from("b")][..]));
        assert_eq!(sheet.row(3), None);
        assert_eq!(sheet.height(), 2);
    }

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(SkipReason::EmptyName.to_string(), "empty name");
        assert_eq!(SkipReason::InvalidLongitude.to_string(), "invalid longitude");
    }
}
