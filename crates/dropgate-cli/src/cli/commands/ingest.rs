//! `dropgate ingest` – run one intake batch and report the outcome.

use anyhow::Result;
use dropgate_core::config::IntakeConfig;
use dropgate_core::intake::FileIntake;
use dropgate_core::loader;
use std::path::PathBuf;

pub async fn run_ingest(cfg: IntakeConfig, paths: &[PathBuf], json: bool) -> Result<()> {
    let batch = loader::load_candidates(paths).await?;
    let mut intake = FileIntake::new(cfg);
    intake.ingest(batch).await;

    if json {
        print_json(&intake)?;
    } else {
        print_table(&intake);
    }
    Ok(())
}

fn print_table(intake: &FileIntake) {
    for flag in [intake.count_error(), intake.size_error()] {
        if flag.status {
            println!("ERROR: {}", flag.message);
        }
    }

    if intake.accepted().is_empty() {
        println!("No files accepted.");
    } else {
        println!("{:<24} {:<8} {:<10} {}", "ID", "TYPE", "SIZE", "URL");
        for d in intake.accepted() {
            println!(
                "{:<24} {:<8} {:<10} {}",
                d.id,
                d.extension,
                d.file.len(),
                d.url
            );
        }
    }

    if !intake.rejected().is_empty() {
        println!();
        println!("Rejected (unsupported type):");
        for f in intake.rejected() {
            let mime = if f.mime().is_empty() { "-" } else { f.mime() };
            println!("  {} ({})", f.name(), mime);
        }
    }
}

fn print_json(intake: &FileIntake) -> Result<()> {
    let report = serde_json::json!({
        "accepted": intake
            .accepted()
            .iter()
            .map(|d| serde_json::json!({
                "id": d.id,
                "extension": d.extension,
                "name": d.file.name(),
                "bytes": d.file.len(),
                "url": d.url,
            }))
            .collect::<Vec<_>>(),
        "rejected": intake
            .rejected()
            .iter()
            .map(|f| serde_json::json!({
                "name": f.name(),
                "mime": f.mime(),
                "bytes": f.len(),
            }))
            .collect::<Vec<_>>(),
        "count_error": {
            "status": intake.count_error().status,
            "message": intake.count_error().message,
        },
        "size_error": {
            "status": intake.size_error().status,
            "message": intake.size_error().message,
        },
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
