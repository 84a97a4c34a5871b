//! Définition et implémentation de la commande de conversion
//!
//! Classeur -> en-têtes -> colonnes -> lignes -> features -> GeoJSON.
//! Toute erreur fatale est remontée avant l'écriture du fichier de sortie.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use crate::config::Config;
use crate::export::export_to_geojson;
use crate::report::ConversionReport;

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// JSON config file ({"input_path": ..., "output_path": ...})
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Source workbook, first sheet only (default: data/empreendimentos.xlsx)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output GeoJSON file (default: data/empreendimentos.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Save a JSON conversion report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl ConvertArgs {
    /// Configuration effective de l'exécution
    pub fn resolve_config(&self) -> Result<Config> {
        Config::resolve(
            self.config.as_deref(),
            self.input.clone(),
            self.output.clone(),
        )
    }
}

/// Exécute la conversion
pub fn cmd_convert(config: &Config) -> Result<ConversionReport> {
    let start = Instant::now();
    info!(
        input = %config.input_path.display(),
        output = %config.output_path.display(),
        "Starting conversion"
    );

    let sheet = planilha::read_first_sheet(&config.input_path)
        .context(format!("Cannot load {}", config.input_path.display()))?;

    let conversion = planilha::convert(&sheet)
        .context(format!("Invalid layout in sheet '{}'", sheet.name))?;

    let mut report = ConversionReport::new(&conversion, &config.input_path, &config.output_path);

    println!("Header row detected: {}", report.header_row);
    println!("Column mapping: {}", report.mapping_line());

    export_to_geojson(&conversion, &config.output_path)?;

    report.set_duration(start.elapsed());
    info!(
        features = report.features,
        output = %config.output_path.display(),
        "Export complete"
    );
    println!("{}", report.summary());

    Ok(report)
}

/// Exécute la conversion puis traite le rapport (affichage, sauvegarde)
pub fn run(args: &ConvertArgs, detailed: bool) -> Result<ConversionReport> {
    let config = args.resolve_config()?;
    let report = cmd_convert(&config)?;

    if detailed {
        report.display();
    }
    if let Some(path) = &args.report {
        save_report(&report, path)?;
    }

    Ok(report)
}

fn save_report(report: &ConversionReport, path: &Path) -> Result<()> {
    report
        .save_to_file(path)
        .context(format!("Failed to save report: {}", path.display()))?;
    info!(path = %path.display(), "Report saved");
    Ok(())
}
