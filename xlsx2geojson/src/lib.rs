//! # xlsx2geojson
//!
//! Conversion du tableur des empreendimentos vers un GeoJSON de points.
//!
//! ## Features
//!
//! - Configuration par fichier JSON, variables d'environnement (`.env`) et CLI
//! - Écriture tout-ou-rien du fichier de sortie
//! - Rapport de conversion (console ou JSON)
//!
//! ## Usage CLI
//!
//! ```bash
//! # Chemins par défaut : data/empreendimentos.xlsx -> data/empreendimentos.json
//! xlsx2geojson
//!
//! # Chemins explicites et rapport détaillé
//! xlsx2geojson --input ./planilha.xlsx --output ./out/pontos.json -v --report report.json
//! ```

pub mod cli;
pub mod config;
pub mod export;
pub mod report;

pub use config::Config;
pub use report::ConversionReport;
