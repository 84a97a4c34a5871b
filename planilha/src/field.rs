//! Champs canoniques et table d'alias

/// Un des 11 champs reconnus, quel que soit le libellé de la colonne source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Nome,
    Latitude,
    Longitude,
    Concelho,
    Estado,
    Promotor,
    Tipologias,
    Conclusao,
    PrecoM2,
    Notas,
    Link,
}

impl Field {
    /// Ordre de déclaration : obligatoires puis optionnels
    pub const ALL: [Field; 11] = [
        Field::Nome,
        Field::Latitude,
        Field::Longitude,
        Field::Concelho,
        Field::Estado,
        Field::Promotor,
        Field::Tipologias,
        Field::Conclusao,
        Field::PrecoM2,
        Field::Notas,
        Field::Link,
    ];

    pub const REQUIRED: [Field; 3] = [Field::Nome, Field::Latitude, Field::Longitude];

    /// Champs recopiés en propriétés texte (hors nom et coordonnées)
    pub const OPTIONAL: [Field; 8] = [
        Field::Concelho,
        Field::Estado,
        Field::Promotor,
        Field::Tipologias,
        Field::Conclusao,
        Field::PrecoM2,
        Field::Notas,
        Field::Link,
    ];

    /// Clé dans les propriétés GeoJSON
    pub fn key(self) -> &'static str {
        match self {
            Field::Nome => "nome",
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::Concelho => "concelho",
            Field::Estado => "estado",
            Field::Promotor => "promotor",
            Field::Tipologias => "tipologias",
            Field::Conclusao => "conclusao",
            Field::PrecoM2 => "preco_m2",
            Field::Notas => "notas",
            Field::Link => "link",
        }
    }

    /// Libellés acceptés, par ordre de priorité
    ///
    /// Ils sont normalisés avant comparaison, les variantes accentuées sont
    /// donc redondantes mais gardées telles qu'utilisées dans les fichiers.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Nome => &[
                "nome",
                "empreendimento",
                "projeto",
                "projecto",
                "name",
                "titulo",
                "título",
            ],
            Field::Concelho => &["concelho", "municipio", "município", "city", "local"],
            Field::Estado => &["estado", "status", "fase"],
            Field::Promotor => &["promotor", "developer", "owner"],
            Field::Tipologias => &["tipologias", "tipos", "typologies"],
            Field::Conclusao => &[
                "conclusao",
                "conclusão",
                "entrega",
                "completion",
                "ano",
                "ano_conclusao",
            ],
            Field::PrecoM2 => &[
                "preco_m2",
                "preco_med_m2",
                "preco_medio_m2",
                "preço_m2",
                "price_m2",
                "price_per_sqm",
            ],
            Field::Notas => &["notas", "observacoes", "observações", "notes"],
            Field::Latitude => &["latitude", "lat"],
            Field::Longitude => &["longitude", "lng", "long", "lon", "x", "y"],
            Field::Link => &["link", "url", "website"],
        }
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }
}
