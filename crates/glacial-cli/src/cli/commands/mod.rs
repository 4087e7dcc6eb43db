//! CLI command handlers. Each command is in its own file for clarity.

mod add;
mod archive;
mod chunk_size;
mod digest;
mod mark;
mod remove;
mod status;
mod verify;

pub use add::run_add;
pub use archive::run_archive;
pub use chunk_size::run_chunk_size;
pub use digest::run_digest;
pub use mark::run_mark;
pub use remove::run_remove;
pub use status::run_status;
pub use verify::run_verify;

use anyhow::Result;
use glacial_core::checksum::DigestAlgorithm;
use glacial_core::config::GlacialConfig;

/// Algorithm from the command line, or the configured default.
fn resolve_algorithm(
    cfg: &GlacialConfig,
    name: Option<&str>,
) -> Result<DigestAlgorithm> {
    Ok(match name {
        Some(name) => name.parse()?,
        None => cfg.default_algorithm,
    })
}
