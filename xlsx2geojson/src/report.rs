//! Rapport de conversion
//!
//! Compteurs, mapping des colonnes et lignes ignorées, affichables sur la
//! console ou sauvegardés en JSON.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use planilha::Conversion;
use serde::Serialize;

/// Colonne retenue pour un champ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappedColumn {
    /// Champ canonique
    pub field: String,
    /// Texte original de l'en-tête
    pub header: String,
}

/// Ligne ignorée
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// Numéro de ligne dans le tableur (1-based)
    pub row: usize,
    pub reason: String,
}

/// Rapport complet de conversion
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Ligne d'en-têtes (1-based)
    pub header_row: usize,
    /// Mapping dans l'ordre de déclaration des champs
    pub mapping: Vec<MappedColumn>,
    pub rows_read: usize,
    pub rows_skipped: usize,
    pub features: usize,
    pub skipped: Vec<SkippedLine>,
    pub duration_secs: f64,
}

impl ConversionReport {
    /// Construit le rapport d'une conversion réussie
    pub fn new(conversion: &Conversion, input: &Path, output: &Path) -> Self {
        Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            header_row: conversion.header.number,
            mapping: conversion
                .mapping()
                .into_iter()
                .map(|(field, header)| MappedColumn {
                    field: field.to_string(),
                    header,
                })
                .collect(),
            rows_read: conversion.stats.rows_read,
            rows_skipped: conversion.stats.rows_skipped,
            features: conversion.stats.features,
            skipped: conversion
                .skipped
                .iter()
                .map(|s| SkippedLine {
                    row: s.row,
                    reason: s.reason.to_string(),
                })
                .collect(),
            duration_secs: 0.0,
        }
    }

    /// Définit la durée de la conversion
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration_secs = duration.as_secs_f64();
    }

    /// Mapping au format `{nome: "Nome", latitude: "Lat"}`
    pub fn mapping_line(&self) -> String {
        let pairs: Vec<String> = self
            .mapping
            .iter()
            .map(|m| format!("{}: {:?}", m.field, m.header))
            .collect();
        format!("{{{}}}", pairs.join(", "))
    }

    /// Affichage compact pour le résumé
    pub fn summary(&self) -> String {
        format!(
            "OK: {} points generated. Rows read: {} (skipped for missing name/coordinates: {}).",
            self.features, self.rows_read, self.rows_skipped
        )
    }

    /// Affiche le rapport détaillé sur la console
    pub fn display(&self) {
        println!("\n{}", "=".repeat(60));
        println!("CONVERSION REPORT - {}", self.input.display());
        println!("{}", "=".repeat(60));

        println!("\nOutput: {}", self.output.display());
        println!("Duration: {:.2}s", self.duration_secs);
        println!("Header row: {}", self.header_row);

        println!("\n--- COLUMNS ---");
        for m in &self.mapping {
            println!("  {:<12} <- {}", m.field, m.header);
        }

        println!("\n--- SUMMARY ---");
        println!(
            "Rows: {} read, {} features, {} skipped",
            self.rows_read, self.features, self.rows_skipped
        );

        if !self.skipped.is_empty() {
            println!("\n--- SKIPPED ROWS ({}) ---", self.skipped.len());
            for s in self.skipped.iter().take(20) {
                println!("  row {}: {}", s.row, s.reason);
            }
            if self.skipped.len() > 20 {
                println!("  ... and {} more", self.skipped.len() - 20);
            }
        }

        println!("\n{}", "=".repeat(60));
    }

    /// Sauvegarde le rapport en JSON
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
