//! Arbre JSON de sortie et nettoyage anti-NaN
//!
//! `serde_json::Value` ne peut pas contenir de NaN, et `serde_json` écrit
//! `null` pour un flottant non fini sans le signaler. L'arbre est donc porté
//! par `Node`, nettoyé par [`sanitize`], puis sérialisé par un `Serialize`
//! qui refuse tout flottant non fini restant.

use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::PlanilhaError;

/// Noeud de l'arbre JSON de sortie
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<Node>),
    /// Objet, dans l'ordre d'insertion des clés
    Map(Vec<(String, Node)>),
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, Node)>) -> Self {
        Node::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Valeur d'une clé d'objet
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

/// Remplace tout flottant NaN ou infini par `null`, à toute profondeur
pub fn sanitize(node: Node) -> Node {
    match node {
        Node::Number(n) if !n.is_finite() => Node::Null,
        Node::List(items) => Node::List(items.into_iter().map(sanitize).collect()),
        Node::Map(entries) => Node::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k, sanitize(v)))
                .collect(),
        ),
        other => other,
    }
}

/// Vérifie qu'aucun flottant non fini ne subsiste
///
/// L'erreur donne le chemin du premier noeud fautif (`$.features[0]...`).
pub fn ensure_finite(node: &Node) -> Result<(), PlanilhaError> {
    fn walk(node: &Node, path: &mut String) -> Result<(), PlanilhaError> {
        match node {
            Node::Number(n) if !n.is_finite() => Err(PlanilhaError::NonFinite {
                path: path.clone(),
            }),
            Node::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    let len = path.len();
                    path.push_str(&format!("[{}]", i));
                    walk(item, path)?;
                    path.truncate(len);
                }
                Ok(())
            }
            Node::Map(entries) => {
                for (key, value) in entries {
                    let len = path.len();
                    path.push('.');
                    path.push_str(key);
                    walk(value, path)?;
                    path.truncate(len);
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    walk(node, &mut String::from("$"))
}

/// Sérialise en JSON indenté (2 espaces), caractères non ASCII non échappés
pub fn to_json_pretty(node: &Node) -> Result<String, PlanilhaError> {
    ensure_finite(node)?;
    Ok(serde_json::to_string_pretty(node)?)
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Bool(b) => serializer.serialize_bool(*b),
            Node::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            Node::Number(n) => Err(S::Error::custom(format!(
                "non-finite number {} cannot be serialized",
                n
            ))),
            Node::Text(s) => serializer.serialize_str(s),
            Node::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Node::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}
