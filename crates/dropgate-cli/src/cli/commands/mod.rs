//! CLI command handlers. Each command is in its own file for clarity.

mod check;
mod ingest;
mod types;

pub use check::run_check;
pub use ingest::run_ingest;
pub use types::run_types;
