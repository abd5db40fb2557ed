//! `dropgate check` – single-file verdicts against the active policy.

use anyhow::Result;
use dropgate_core::config::IntakeConfig;
use dropgate_core::loader;
use dropgate_core::validate;
use std::path::Path;

pub async fn run_check(cfg: &IntakeConfig, path: &Path) -> Result<()> {
    let file = loader::load_candidate(path).await?;

    let type_ok = validate::is_valid_file_type(&file, &cfg.accepted_types);
    let size_ok = !validate::exceeds_size(&file, cfg.max_file_size);
    let mime = if file.mime().is_empty() { "-" } else { file.mime() };

    println!("{}", file.name());
    println!("  declared type: {}", mime);
    println!(
        "  type:          {}",
        if type_ok { "accepted" } else { "unsupported" }
    );
    println!(
        "  size:          {} bytes ({})",
        file.len(),
        if size_ok {
            "within limit".to_string()
        } else {
            format!("exceeds {}", cfg.printable_max_file_size())
        }
    );
    Ok(())
}
