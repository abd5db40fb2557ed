use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Accepted-type map: declared MIME type → dotted file extension.
pub type TypeExtensions = BTreeMap<String, String>;

/// Default accepted types: common raster images, SVG, PDF, and Word documents.
pub fn default_type_extensions() -> TypeExtensions {
    [
        ("image/png", ".png"),
        ("image/jpeg", ".jpeg"),
        ("image/jpg", ".jpg"),
        ("image/svg+xml", ".svg"),
        ("application/pdf", ".pdf"),
        ("application/msword", ".doc"),
        (
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            ".docx",
        ),
    ]
    .into_iter()
    .map(|(mime, ext)| (mime.to_string(), ext.to_string()))
    .collect()
}

fn default_max_upload_count() -> Option<u32> {
    Some(30)
}

fn default_max_file_size() -> u64 {
    5_000_000
}

/// Intake policy loaded from `~/.config/dropgate/config.toml` (or supplied
/// directly by an embedding application).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Maximum number of files per intake batch; None disables the check.
    #[serde(default = "default_max_upload_count")]
    pub max_upload_count: Option<u32>,
    /// Maximum size of a single file in bytes.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
    /// Accepted MIME type → extension map; keys gate intake, values become
    /// descriptor extensions.
    #[serde(default = "default_type_extensions")]
    pub accepted_types: TypeExtensions,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            max_upload_count: default_max_upload_count(),
            max_file_size: default_max_file_size(),
            accepted_types: default_type_extensions(),
        }
    }
}

impl IntakeConfig {
    /// Human-readable form of `max_file_size` for error messages.
    pub fn printable_max_file_size(&self) -> String {
        printable_size(self.max_file_size)
    }
}

/// Render a byte count the way a user expects to read a size limit
/// (e.g. 5_000_000 → "5 MB").
pub fn printable_size(bytes: u64) -> String {
    if bytes >= 1_000_000 && bytes % 1_000_000 == 0 {
        format!("{} MB", bytes / 1_000_000)
    } else if bytes >= 1_000 && bytes % 1_000 == 0 {
        format!("{} kB", bytes / 1_000)
    } else {
        format!("{} bytes", bytes)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dropgate")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<IntakeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = IntakeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: IntakeConfig = toml::from_str(&data)?;
    Ok(cfg)
}
