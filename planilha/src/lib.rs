//! # planilha
//!
//! Conversion d'un tableur d'empreendimentos (projets immobiliers) en
//! FeatureCollection GeoJSON de points.
//!
//! ## Features
//!
//! - Détection automatique de la ligne d'en-têtes (10 premières lignes)
//! - En-têtes tolérants : casse, accents et alias (`Preço_m2`, `lat`, `Projeto`...)
//! - Coordonnées à virgule décimale acceptées (`38,72`)
//! - Aucun NaN/Infinity dans la sortie, garanti à la sérialisation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use planilha::{convert, read_first_sheet};
//! use std::path::Path;
//!
//! let sheet = read_first_sheet(Path::new("data/empreendimentos.xlsx"))?;
//! let conversion = convert(&sheet)?;
//! println!("{} points", conversion.stats.features);
//! let json = conversion.to_json()?;
//! ```

pub mod alias;
pub mod coerce;
pub mod error;
pub mod feature;
pub mod field;
pub mod header;
pub mod normalize;
pub mod sanitize;
pub mod types;
pub mod workbook;

pub use alias::ColumnMap;
pub use error::PlanilhaError;
pub use feature::{Feature, FeatureCollection};
pub use field::Field;
pub use header::{HeaderRow, HEADER_SCAN_ROWS};
pub use sanitize::Node;
pub use types::{Cell, RunStats, Sheet, SkipReason, SkippedRow};
pub use workbook::read_first_sheet;

use tracing::{debug, info, warn};

/// Résultat d'une conversion
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Ligne d'en-têtes détectée
    pub header: HeaderRow,

    /// Colonnes résolues
    pub columns: ColumnMap,

    /// Features des lignes valides, dans l'ordre de la feuille
    pub collection: FeatureCollection,

    /// Lignes ignorées, dans l'ordre de la feuille
    pub skipped: Vec<SkippedRow>,

    pub stats: RunStats,
}

impl Conversion {
    /// Champ -> texte original de l'en-tête retenu
    pub fn mapping(&self) -> Vec<(&'static str, String)> {
        self.columns.describe(&self.header)
    }

    /// Document final, nettoyé des flottants non finis
    pub fn document(&self) -> Node {
        sanitize::sanitize(self.collection.to_node())
    }

    /// Document final en JSON indenté
    ///
    /// # Errors
    ///
    /// `PlanilhaError::NonFinite` si un flottant non fini a survécu au nettoyage.
    pub fn to_json(&self) -> Result<String, PlanilhaError> {
        sanitize::to_json_pretty(&self.document())
    }
}

/// Convertit une feuille en features GeoJSON.
///
/// # Errors
///
/// `HeaderNotFound` si aucune des premières lignes n'est un en-tête,
/// `MissingRequired` si nom, latitude ou longitude ne sont pas mappés.
/// Les lignes invalides ne sont pas des erreurs : elles sont ignorées et comptées.
pub fn convert(sheet: &Sheet) -> Result<Conversion, PlanilhaError> {
    let header = header::locate_header(sheet)?;
    info!(row = header.number, "Header row detected");

    let columns = alias::resolve_required(&header)?;

    let mut collection = FeatureCollection::new();
    let mut skipped = Vec::new();
    let mut stats = RunStats::default();

    for (offset, row) in sheet.rows.iter().skip(header.number).enumerate() {
        let row_number = header.number + 1 + offset;
        stats.rows_read += 1;

        match coerce::coerce_row(row, &columns) {
            Ok(feature) => collection.push(feature),
            Err(reason) => {
                debug!(row = row_number, reason = %reason, "Row skipped");
                stats.rows_skipped += 1;
                skipped.push(SkippedRow {
                    row: row_number,
                    reason,
                });
            }
        }
    }
    stats.features = collection.len();

    if stats.rows_read == 0 {
        warn!(header_row = header.number, "No data rows below the header");
    }

    info!(
        rows_read = stats.rows_read,
        rows_skipped = stats.rows_skipped,
        features = stats.features,
        "Conversion complete"
    );

    Ok(Conversion {
        header,
        columns,
        collection,
        skipped,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_row(cells: &[&str]) -> Vec<Cell> {
        cells
            .iter()
            .map(|s| if s.is_empty() { Cell::Empty } else { Cell::from(*s) })
            .collect()
    }

    fn scenario() -> Sheet {
        Sheet::new(
            "Folha1",
            vec![
                text_row(&["Nome", "Latitude", "Longitude"]),
                text_row(&["Alpha", "38.7", "-9.1"]),
                text_row(&["", "38.7", "-9.1"]),
                text_row(&["Beta", "abc", "-9.1"]),
            ],
        )
    }

    #[test]
    fn test_convert_scenario() {
        let conversion = convert(&scenario()).unwrap();

        assert_eq!(conversion.header.number, 1);
        assert_eq!(
            conversion.stats,
            RunStats {
                rows_read: 3,
                rows_skipped: 2,
                features: 1
            }
        );
        let feature = &conversion.collection.features[0];
        assert_eq!(feature.property("nome"), Some("Alpha"));
        assert_eq!((feature.geometry.x(), feature.geometry.y()), (-9.1, 38.7));
        assert_eq!(
            conversion.skipped,
            vec![
                SkippedRow {
                    row: 3,
                    reason: SkipReason::EmptyName
                },
                SkippedRow {
                    row: 4,
                    reason: SkipReason::InvalidLatitude
                },
            ]
        );
    }

    #[test]
    fn test_convert_json_output() {
        let json = convert(&scenario()).unwrap().to_json().unwrap();
        assert!(json.contains("\"coordinates\": [\n          -9.1,\n          38.7\n        ]"));
        assert!(json.contains("\"nome\": \"Alpha\""));
        assert!(json.contains("\"link\": \"\""));
        assert!(!json.contains("Beta"));
    }

    #[test]
    fn test_convert_is_deterministic() {
        let a = convert(&scenario()).unwrap().to_json().unwrap();
        let b = convert(&scenario()).unwrap().to_json().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_counts_add_up() {
        let mut rows = vec![text_row(&["Projeto", "Lat", "Lon"])];
        for i in 0..20 {
            let lat = if i % 3 == 0 { "x".to_string() } else { format!("{},5", i) };
            let nome = format!("P{}", i);
            rows.push(text_row(&[nome.as_str(), lat.as_str(), "-8"]));
        }
        rows.push(Vec::new());
        let conversion = convert(&Sheet::new("S", rows)).unwrap();
        assert_eq!(conversion.stats.rows_read, 21);
        assert_eq!(
            conversion.stats.rows_skipped + conversion.stats.features,
            conversion.stats.rows_read
        );
        assert_eq!(conversion.stats.features, 13);
    }

    #[test]
    fn test_convert_header_only() {
        let sheet = Sheet::new("S", vec![text_row(&["Nome", "Latitude", "Longitude"])]);
        let conversion = convert(&sheet).unwrap();
        assert_eq!(conversion.stats, RunStats::default());
        assert!(conversion.collection.is_empty());
    }

    #[test]
    fn test_convert_missing_required() {
        let sheet = Sheet::new(
            "S",
            vec![
                text_row(&["Empreendimento X", "Latitude", "Longitude"]),
                text_row(&["Alpha", "38.7", "-9.1"]),
            ],
        );
        assert!(matches!(
            convert(&sheet),
            Err(PlanilhaError::MissingRequired { header_row: 1, .. })
        ));
    }

    #[test]
    fn test_mapping_in_declaration_order() {
        let sheet = Sheet::new(
            "S",
            vec![text_row(&["Link", "Longitude", "Nome", "Estado", "Lat"])],
        );
        let mapping = convert(&sheet).unwrap().mapping();
        let keys: Vec<_> = mapping.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["nome", "latitude", "longitude", "estado", "link"]);
        assert_eq!(mapping[1].1, "Lat");
    }
}
