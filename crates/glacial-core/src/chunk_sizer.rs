//! Multipart chunk-size selection for cold-storage uploads.
//!
//! The storage service caps an upload at 10,000 parts, each part a
//! power-of-two multiple of 1 MiB no larger than 4 GiB. Starting from the
//! 4 MiB minimum and doubling until the archive fits keeps parts as small
//! (and as numerous) as the limits allow.

use thiserror::Error;

/// One mebibyte.
pub const ONE_MB: u64 = 1024 * 1024;
/// One gibibyte.
pub const ONE_GB: u64 = 1024 * ONE_MB;
/// Smallest chunk size ever selected: 4 MiB.
pub const INITIAL_CHUNK_SIZE: u64 = 4 * ONE_MB;
/// Maximum number of parts per multipart upload.
pub const MAX_CHUNK_COUNT: u64 = 10_000;
/// Largest allowed chunk size: 4 GiB.
pub const MAX_CHUNK_SIZE: u64 = 4 * ONE_GB;
/// Largest representable archive: 10,000 parts of 4 GiB, minus 1 MiB of
/// headroom.
pub const MAXIMUM_ARCHIVE_SIZE: u64 = MAX_CHUNK_SIZE * MAX_CHUNK_COUNT - ONE_MB;

/// Chunk-size selection failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkSizeError {
    /// The archive cannot fit within the part limits at any chunk size;
    /// the caller must reject it or split it upstream.
    #[error("archive too large: {size} bytes (maximum {maximum})")]
    ArchiveTooLarge { size: u64, maximum: u64 },
    /// The doubling search escaped the chunk-size ceiling. Unreachable
    /// once the archive passed the size guard, so seeing this error means
    /// a logic defect, not bad input. Never clamped.
    #[error("chunk size {chunk_size} exceeds maximum {maximum}; this is a bug")]
    ChunkLimitExceeded { chunk_size: u64, maximum: u64 },
}

/// Select the chunk size for an archive of `archive_size` bytes: the
/// smallest power-of-two multiple of 4 MiB such that the archive fits in
/// [`MAX_CHUNK_COUNT`] parts.
pub fn calculate(archive_size: u64) -> Result<u64, ChunkSizeError> {
    calculate_with_limits(
        archive_size,
        INITIAL_CHUNK_SIZE,
        MAX_CHUNK_COUNT,
        MAX_CHUNK_SIZE,
        MAXIMUM_ARCHIVE_SIZE,
    )
}

/// Number of parts an archive of `archive_size` bytes splits into at
/// `chunk_size`; the last part may be short.
pub fn part_count(archive_size: u64, chunk_size: u64) -> u64 {
    archive_size.div_ceil(chunk_size)
}

// The limits are parameters so tests can drive the defensive branch that
// the public constants make unreachable.
fn calculate_with_limits(
    archive_size: u64,
    initial_chunk_size: u64,
    max_chunk_count: u64,
    max_chunk_size: u64,
    maximum_archive_size: u64,
) -> Result<u64, ChunkSizeError> {
    if archive_size > maximum_archive_size {
        return Err(ChunkSizeError::ArchiveTooLarge {
            size: archive_size,
            maximum: maximum_archive_size,
        });
    }

    let mut chunk_size = initial_chunk_size;
    while chunk_size * max_chunk_count < archive_size {
        chunk_size *= 2;
        if chunk_size > max_chunk_size {
            return Err(ChunkSizeError::ChunkLimitExceeded {
                chunk_size,
                maximum: max_chunk_size,
            });
        }
    }

    Ok(chunk_size)
}
