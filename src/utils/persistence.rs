use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{errors::DashboardError, export::ExportDocument};

/// Writes an export document into `dir` atomically by staging to a
/// temporary file. Returns the final path.
pub fn save_document(document: &ExportDocument, dir: &Path) -> Result<PathBuf, DashboardError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(document.file_name);
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, &document.content)?;
    fs::rename(&tmp, &path)?;
    Ok(path)
}
