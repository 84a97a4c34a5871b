//! Résolution des champs canoniques vers les colonnes de la feuille

use std::collections::BTreeMap;

use tracing::info;

use crate::field::Field;
use crate::header::HeaderRow;
use crate::normalize::normalize;
use crate::PlanilhaError;

/// Champ canonique -> index de colonne (0-based) dans la ligne d'en-têtes
///
/// Construite une fois par exécution puis immuable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    columns: BTreeMap<Field, usize>,
}

impl ColumnMap {
    pub fn get(&self, field: Field) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.columns.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Champs résolus, dans l'ordre de déclaration
    pub fn iter(&self) -> impl Iterator<Item = (Field, usize)> + '_ {
        self.columns.iter().map(|(f, i)| (*f, *i))
    }

    /// Champs obligatoires absents
    pub fn missing_required(&self) -> Vec<&'static str> {
        Field::REQUIRED
            .iter()
            .filter(|f| !self.contains(**f))
            .map(|f| f.key())
            .collect()
    }

    /// Champ -> texte original de l'en-tête retenu
    pub fn describe(&self, header: &HeaderRow) -> Vec<(&'static str, String)> {
        self.iter()
            .map(|(field, col)| {
                let original = header.original.get(col).cloned().unwrap_or_default();
                (field.key(), original)
            })
            .collect()
    }
}

/// Associe chaque champ à la première colonne qui porte un de ses alias
///
/// Les alias sont essayés dans l'ordre déclaré ; pour un même libellé, la
/// colonne la plus à gauche gagne. Un champ sans alias trouvé est absent.
pub fn resolve(header: &HeaderRow) -> ColumnMap {
    let mut columns = BTreeMap::new();

    for field in Field::ALL {
        let found = field.aliases().iter().find_map(|alias| {
            let alias = normalize(alias);
            header.normalized.iter().position(|h| *h == alias)
        });
        if let Some(col) = found {
            columns.insert(field, col);
        }
    }

    ColumnMap { columns }
}

/// Résout les colonnes et vérifie la présence des champs obligatoires
pub fn resolve_required(header: &HeaderRow) -> Result<ColumnMap, PlanilhaError> {
    let map = resolve(header);

    let missing = map.missing_required();
    if !missing.is_empty() {
        return Err(PlanilhaError::MissingRequired {
            missing,
            header_row: header.number,
            headers: header.normalized.clone(),
        });
    }

    info!(
        header_row = header.number,
        mapped = map.len(),
        "Column mapping: {:?}",
        map.describe(header)
    );

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(cells: &[&str]) -> HeaderRow {
        HeaderRow {
            number: 1,
            normalized: cells.iter().map(|s| normalize(s)).collect(),
            original: cells.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_resolve_canonical_headers() {
        let h = header(&["Nome", "Concelho", "Latitude", "Longitude", "Preço_m2"]);
        let map = resolve(&h);
        assert_eq!(map.get(Field::Nome), Some(0));
        assert_eq!(map.get(Field::Concelho), Some(1));
        assert_eq!(map.get(Field::Latitude), Some(2));
        assert_eq!(map.get(Field::Longitude), Some(3));
        assert_eq!(map.get(Field::PrecoM2), Some(4));
        assert_eq!(map.get(Field::Link), None);
        assert_eq!(map.len(), 5);
    }

    #[test]
    fn test_alias_precedence_follows_declared_order() {
        // "lat" vient avant "latitude" dans la feuille, mais "latitude" est
        // déclaré en premier
        let h = header(&["Nome", "lat", "latitude", "lon"]);
        let map = resolve(&h);
        assert_eq!(map.get(Field::Latitude), Some(2));
        assert_eq!(map.get(Field::Longitude), Some(3));
    }

    #[test]
    fn test_duplicate_header_leftmost_wins() {
        let h = header(&["Nome", "Lat", "LAT", "Lng"]);
        assert_eq!(resolve(&h).get(Field::Latitude), Some(1));
    }

    #[test]
    fn test_accented_aliases() {
        let h = header(&["Título", "Latitude", "Longitude", "Observações", "Município"]);
        let map = resolve(&h);
        assert_eq!(map.get(Field::Nome), Some(0));
        assert_eq!(map.get(Field::Notas), Some(3));
        assert_eq!(map.get(Field::Concelho), Some(4));
    }

    #[test]
    fn test_missing_required() {
        let h = header(&["Nome do empreendimento", "Latitude", "Longitude"]);
        match resolve_required(&h) {
            Err(PlanilhaError::MissingRequired {
                missing, headers, ..
            }) => {
                assert_eq!(missing, ["nome"]);
                assert_eq!(headers[0], "nome do empreendimento");
            }
            other => panic!("expected MissingRequired, got {:?}", other),
        }
    }

    #[test]
    fn test_describe_uses_original_text() {
        let h = header(&["Projeto", "LAT", "Long"]);
        let map = resolve_required(&h).unwrap();
        assert_eq!(
            map.describe(&h),
            vec![
                ("nome", "Projeto".to_string()),
                ("latitude", "LAT".to_string()),
                ("longitude", "Long".to_string()),
            ]
        );
    }
}
