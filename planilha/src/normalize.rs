//! Normalisation des textes d'en-têtes
//!
//! Minuscules, espaces de bord retirés, diacritiques supprimés : `" Preço_m2 "`
//! et `"preco_m2"` deviennent identiques.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::types::Cell;

/// Normalise un texte pour la comparaison tolérante
pub fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Normalise le texte d'une cellule (vide si la cellule est vide)
pub fn normalize_cell(cell: &Cell) -> String {
    cell.as_text().map(|s| normalize(&s)).unwrap_or_default()
}
