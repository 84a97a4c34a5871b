//! Configuration de la conversion
//!
//! Priorité croissante : valeurs par défaut, fichier JSON (`--config`),
//! variables d'environnement, options de ligne de commande.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Classeur lu par défaut
pub const DEFAULT_INPUT: &str = "data/empreendimentos.xlsx";

/// Fichier GeoJSON écrit par défaut
pub const DEFAULT_OUTPUT: &str = "data/empreendimentos.json";

/// Variable d'environnement pour le classeur source
pub const ENV_INPUT: &str = "XLSX2GEOJSON_INPUT";

/// Variable d'environnement pour le fichier de sortie
pub const ENV_OUTPUT: &str = "XLSX2GEOJSON_OUTPUT";

/// Configuration principale
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Classeur source (première feuille uniquement)
    pub input_path: PathBuf,

    /// Fichier GeoJSON de sortie
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Config {
    /// Charge une configuration depuis un fichier JSON
    ///
    /// Les clés absentes gardent leur valeur par défaut.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content).context("Failed to parse config JSON")
    }

    /// Applique les variables d'environnement
    pub fn apply_env(&mut self) {
        self.apply_vars(|key| std::env::var(key).ok());
    }

    fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(input) = var(ENV_INPUT).filter(|v| !v.is_empty()) {
            self.input_path = PathBuf::from(input);
        }
        if let Some(output) = var(ENV_OUTPUT).filter(|v| !v.is_empty()) {
            self.output_path = PathBuf::from(output);
        }
    }

    /// Applique les options de ligne de commande
    pub fn apply_overrides(&mut self, input: Option<PathBuf>, output: Option<PathBuf>) {
        if let Some(input) = input {
            self.input_path = input;
        }
        if let Some(output) = output {
            self.output_path = output;
        }
    }

    /// Construit la configuration complète d'une exécution
    pub fn resolve(
        config_file: Option<&Path>,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_env();
        config.apply_overrides(input, output);
        Ok(config)
    }
}
