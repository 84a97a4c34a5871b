//! Écriture du document GeoJSON
//!
//! Le document est entièrement sérialisé avant de toucher au disque, puis
//! écrit dans un fichier temporaire voisin et renommé : en cas d'échec, le
//! fichier de sortie n'existe pas ou garde son contenu précédent.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use planilha::Conversion;
use tracing::debug;

/// Exporte une conversion en GeoJSON (UTF-8, indentation 2, sans NaN)
pub fn export_to_geojson(conversion: &Conversion, output_path: &Path) -> Result<()> {
    let json = conversion
        .to_json()
        .context("Refusing to write a document with non-finite numbers")?;

    write_atomic(output_path, json.as_bytes())
}

/// Écrit `content` dans `path`, dossiers parents créés
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create directory: {}", parent.display()))?;
    }

    let tmp_path = temp_path(path);
    {
        let file = File::create(&tmp_path)
            .context(format!("Failed to create file: {}", tmp_path.display()))?;
        let mut writer = BufWriter::new(file);
        writer.write_all(content)?;
        writer.flush()?;
    }

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        std::fs::remove_file(&tmp_path).ok();
        return Err(e).context(format!("Failed to write {}", path.display()));
    }

    debug!(path = %path.display(), bytes = content.len(), "Output written");
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
