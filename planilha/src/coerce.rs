//! Conversion typée des lignes de données

use geo::Point;

use crate::alias::ColumnMap;
use crate::feature::Feature;
use crate::field::Field;
use crate::types::{Cell, SkipReason};

/// Valeur d'un champ dans une ligne
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Colonne non mappée, hors de la ligne, ou cellule vide
    Absent,
    /// Cellule présente mais blanche après trim
    Blank,
    Present(String),
}

impl FieldValue {
    /// Texte de la propriété : vide pour `Absent` et `Blank`
    pub fn into_text(self) -> String {
        match self {
            FieldValue::Present(s) => s,
            FieldValue::Absent | FieldValue::Blank => String::new(),
        }
    }
}

/// Cellule d'un champ, `None` si non mappé ou hors limites
pub fn get<'a>(row: &'a [Cell], map: &ColumnMap, field: Field) -> Option<&'a Cell> {
    map.get(field)
        .and_then(|col| row.get(col))
        .filter(|cell| !cell.is_empty())
}

/// Texte trimé d'un champ
pub fn text(row: &[Cell], map: &ColumnMap, field: Field) -> FieldValue {
    match get(row, map, field).and_then(Cell::as_text) {
        None => FieldValue::Absent,
        Some(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                FieldValue::Blank
            } else {
                FieldValue::Present(trimmed.to_string())
            }
        }
    }
}

/// Conversion numérique tolérante (virgule décimale acceptée)
///
/// Retourne `None` si la cellule est absente, illisible, NaN ou infinie.
pub fn to_number(cell: Option<&Cell>) -> Option<f64> {
    let text = cell?.as_text()?;
    let text = text.trim().replace(',', ".");
    fast_float::parse::<f64, _>(&text)
        .ok()
        .filter(|n| n.is_finite())
}

/// Construit la feature d'une ligne, ou la raison pour laquelle elle est ignorée
pub fn coerce_row(row: &[Cell], map: &ColumnMap) -> Result<Feature, SkipReason> {
    let nome = text(row, map, Field::Nome).into_text();
    if nome.is_empty() {
        return Err(SkipReason::EmptyName);
    }

    let lat = to_number(get(row, map, Field::Latitude)).ok_or(SkipReason::InvalidLatitude)?;
    let lon = to_number(get(row, map, Field::Longitude)).ok_or(SkipReason::InvalidLongitude)?;

    let mut properties = Vec::with_capacity(1 + Field::OPTIONAL.len());
    properties.push((Field::Nome.key(), nome));
    for field in Field::OPTIONAL {
        properties.push((field.key(), text(row, map, field).into_text()));
    }

    Ok(Feature {
        properties,
        geometry: Point::new(lon, lat),
    })
}
