//! Streaming digest computation and single-file verification.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::DigestAlgorithm;

/// Default read block size: 64 KiB.
pub const DEFAULT_BLOCK_SIZE: usize = 64 * 1024;

/// Compute the digest of everything `reader` yields, reading in
/// `block_size` chunks to keep memory use bounded regardless of input
/// size. Consumes the reader to EOF and returns the lowercase hex digest.
pub fn digest_reader<R: Read>(
    mut reader: R,
    algorithm: DigestAlgorithm,
    block_size: usize,
) -> Result<String> {
    anyhow::ensure!(block_size > 0, "digest block size must be non-zero");
    let mut hasher = algorithm.hasher();
    let mut buf = vec![0u8; block_size];
    loop {
        let n = reader.read(&mut buf).context("read for digest")?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Compute the digest of the file at `path`. The file handle is scoped to
/// this call and released on every exit path, including mid-read errors.
pub fn digest_path(path: &Path, algorithm: DigestAlgorithm, block_size: usize) -> Result<String> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    digest_reader(file, algorithm, block_size)
        .with_context(|| format!("digest {}", path.display()))
}

/// True iff the reader's digest equals `expected` (case-sensitive hex
/// string comparison).
pub fn verify_reader<R: Read>(
    expected: &str,
    reader: R,
    algorithm: DigestAlgorithm,
    block_size: usize,
) -> Result<bool> {
    Ok(digest_reader(reader, algorithm, block_size)? == expected)
}

/// True iff the digest of the file at `path` equals `expected`.
pub fn verify_path(
    expected: &str,
    path: &Path,
    algorithm: DigestAlgorithm,
    block_size: usize,
) -> Result<bool> {
    Ok(digest_path(path, algorithm, block_size)? == expected)
}
