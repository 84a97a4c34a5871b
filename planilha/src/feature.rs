//! Assemblage des features GeoJSON

use geo::Point;

use crate::sanitize::Node;

/// Un empreendimento géolocalisé
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Propriétés texte : `nome` d'abord, puis les champs optionnels
    pub properties: Vec<(&'static str, String)>,

    /// Position (x = longitude, y = latitude), WGS84 tel que fourni
    pub geometry: Point<f64>,
}

impl Feature {
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn to_node(&self) -> Node {
        Node::map([
            ("type", Node::text("Feature")),
            (
                "properties",
                Node::map(
                    self.properties
                        .iter()
                        .map(|(k, v)| (*k, Node::text(v.as_str()))),
                ),
            ),
            (
                "geometry",
                Node::map([
                    ("type", Node::text("Point")),
                    (
                        "coordinates",
                        Node::List(vec![
                            Node::Number(self.geometry.x()),
                            Node::Number(self.geometry.y()),
                        ]),
                    ),
                ]),
            ),
        ])
    }
}

/// Features dans l'ordre des lignes de la feuille
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn to_node(&self) -> Node {
        Node::map([
            ("type", Node::text("FeatureCollection")),
            (
                "features",
                Node::List(self.features.iter().map(Feature::to_node).collect()),
            ),
        ])
    }
}
