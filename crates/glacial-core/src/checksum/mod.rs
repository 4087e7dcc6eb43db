//! Checksum computation and manifest verification.
//!
//! Files are streamed in fixed-size blocks so memory stays bounded for
//! multi-gigabyte archives. Manifest verification isolates per-file
//! failures: a single missing or corrupt file is reported without losing
//! results for the rest of the set.

mod algorithm;
mod file_digest;
mod manifest;

pub use algorithm::{DigestAlgorithm, UnknownAlgorithm};
pub use file_digest::{
    digest_path, digest_reader, verify_path, verify_reader, DEFAULT_BLOCK_SIZE,
};
pub use manifest::{verify_manifest, ManifestEntry};
