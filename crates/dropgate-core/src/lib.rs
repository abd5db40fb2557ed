pub mod config;
pub mod logging;

// Intake pipeline, leaf-first.
pub mod blob_url;
pub mod descriptor;
pub mod file;
pub mod intake;
pub mod loader;
pub mod svg;
pub mod validate;
