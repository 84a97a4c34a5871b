//! Détection de la ligne d'en-têtes
//!
//! L'en-tête n'est pas forcément en ligne 1 : les classeurs ont souvent un
//! titre ou des lignes vides au-dessus. On parcourt les premières lignes et
//! on retient la première qui contient un nom, une latitude et une longitude.

use tracing::debug;

use crate::normalize::normalize_cell;
use crate::types::Sheet;
use crate::PlanilhaError;

/// Nombre de lignes examinées en haut de la feuille
pub const HEADER_SCAN_ROWS: usize = 10;

const NAME_MARKERS: [&str; 3] = ["empreendimento", "projeto", "projecto"];
const LATITUDE_HEADERS: [&str; 2] = ["latitude", "lat"];
const LONGITUDE_HEADERS: [&str; 4] = ["longitude", "lng", "long", "lon"];

/// Ligne d'en-têtes détectée
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRow {
    /// Numéro de ligne dans le tableur (1-based)
    pub number: usize,
    /// En-têtes normalisés, un par colonne
    pub normalized: Vec<String>,
    /// Texte original des cellules (vide pour une cellule vide)
    pub original: Vec<String>,
}

/// Cherche la ligne d'en-têtes dans les `HEADER_SCAN_ROWS` premières lignes
pub fn locate_header(sheet: &Sheet) -> Result<HeaderRow, PlanilhaError> {
    for (index, row) in sheet.rows.iter().take(HEADER_SCAN_ROWS).enumerate() {
        let normalized: Vec<String> = row.iter().map(normalize_cell).collect();

        if normalized.iter().all(String::is_empty) {
            continue;
        }

        if is_header(&normalized) {
            let original = row
                .iter()
                .map(|c| c.as_text().unwrap_or_default())
                .collect();
            return Ok(HeaderRow {
                number: index + 1,
                normalized,
                original,
            });
        }

        debug!(row = index + 1, "Not a header row");
    }

    Err(PlanilhaError::HeaderNotFound {
        scanned: HEADER_SCAN_ROWS,
    })
}

/// Une ligne est un en-tête si elle a un nom, une latitude et une longitude
fn is_header(normalized: &[String]) -> bool {
    let has_name = normalized
        .iter()
        .any(|h| h == "nome" || NAME_MARKERS.iter().any(|m| h.contains(m)));
    let has_lat = normalized
        .iter()
        .any(|h| LATITUDE_HEADERS.contains(&h.as_str()));
    let has_lon = normalized
        .iter()
        .any(|h| LONGITUDE_HEADERS.contains(&h.as_str()));

    has_name && has_lat && has_lon
}
