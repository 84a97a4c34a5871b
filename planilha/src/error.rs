//! Types d'erreurs pour le crate planilha

use std::path::PathBuf;

use thiserror::Error;

/// Erreurs fatales de la conversion
///
/// Les erreurs au niveau d'une ligne (nom vide, coordonnée illisible) ne sont
/// pas des erreurs : la ligne est ignorée et comptée.
#[derive(Debug, Error)]
pub enum PlanilhaError {
    /// Erreur d'I/O
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Fichier source absent
    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// Classeur illisible (format, feuille corrompue)
    #[error("Cannot read workbook: {0}")]
    Workbook(String),

    /// Classeur sans aucune feuille
    #[error("Workbook contains no sheets")]
    EmptyWorkbook,

    /// Aucune ligne d'en-têtes reconnue dans les premières lignes
    #[error(
        "No header row found in the first {scanned} rows (need a name, latitude and longitude column)"
    )]
    HeaderNotFound { scanned: usize },

    /// Colonnes obligatoires absentes de la ligne d'en-têtes
    #[error(
        "Missing required columns {missing:?} (headers detected on row {header_row}: {headers:?})"
    )]
    MissingRequired {
        missing: Vec<&'static str>,
        header_row: usize,
        headers: Vec<String>,
    },

    /// Valeur non finie arrivée jusqu'à la sérialisation
    #[error("Non-finite number at {path} reached serialization")]
    NonFinite { path: String },

    /// Erreur de sérialisation JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<calamine::Error> for PlanilhaError {
    fn from(err: calamine::Error) -> Self {
        Self::Workbook(err.to_string())
    }
}
