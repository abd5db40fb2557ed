//! Disk intake surface: turn local paths into candidate files.
//!
//! Stands in for the picker/drop event payloads of a UI host. The declared
//! MIME type is guessed from the extension, the way a browser populates
//! `File.type`; unknown extensions yield an empty declared type, which the
//! validator then classifies as unsupported.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::file::CandidateFile;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("path has no file name: {path}")]
    MissingFileName { path: PathBuf },
}

/// Read one path into a candidate handle.
pub async fn load_candidate(path: &Path) -> Result<CandidateFile, LoadError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| LoadError::MissingFileName {
            path: path.to_path_buf(),
        })?;

    let data = tokio::fs::read(path).await.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mime = mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("")
        .to_string();

    tracing::debug!(name = %name, mime = %mime, bytes = data.len(), "loaded candidate");
    Ok(CandidateFile::new(name, mime, data))
}

/// Read a whole selection, in order. Fails on the first unreadable path;
/// callers wanting partial intake can load paths individually.
pub async fn load_candidates(paths: &[PathBuf]) -> Result<Vec<CandidateFile>, LoadError> {
    let mut out = Vec::with_capacity(paths.len());
    for path in paths {
        out.push(load_candidate(path).await?);
    }
    Ok(out)
}
