//! `dropgate types` – print the active MIME type → extension map.

use dropgate_core::config::IntakeConfig;

pub fn run_types(cfg: &IntakeConfig) {
    println!("{:<72} {}", "MIME TYPE", "EXTENSION");
    for (mime, ext) in &cfg.accepted_types {
        println!("{:<72} {}", mime, ext);
    }
}
