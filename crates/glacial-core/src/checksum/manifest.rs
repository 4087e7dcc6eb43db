//! Manifest parsing and whole-manifest verification.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::file_digest::verify_path;
use super::DigestAlgorithm;

/// One manifest line: an expected hex checksum and the file it covers.
///
/// The first whitespace run separates checksum from path, so paths may
/// contain whitespace but cannot begin with it. A path that itself starts
/// with a checksum-looking token after a doubled separator is not
/// detected; the split rule is fixed for manifest compatibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub expected_checksum: String,
    pub file_path: PathBuf,
}

impl ManifestEntry {
    /// Parse a manifest line. Returns `None` for blank lines. A line with
    /// no whitespace separator yields the whole line as both checksum and
    /// path; the file lookup then fails and the entry is reported missing.
    pub fn parse(line: &str) -> Option<ManifestEntry> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return None;
        }
        match line.split_once(|c: char| c.is_whitespace()) {
            Some((checksum, rest)) => Some(ManifestEntry {
                expected_checksum: checksum.to_string(),
                file_path: PathBuf::from(rest.trim_start()),
            }),
            None => Some(ManifestEntry {
                expected_checksum: line.to_string(),
                file_path: PathBuf::from(line),
            }),
        }
    }
}

/// Verify every entry of the manifest at `manifest_path`.
///
/// Entries are processed in manifest order. A missing file is reported as
/// `<path>: FILE_NOT_FOUND`, a digest mismatch as `<path>: FAIL`, and a
/// match as `<path>: OK`; one failing entry never aborts the rest. When
/// `sink` is `None` no report is written, but the returned boolean (true
/// iff every entry passed) is the same either way.
pub fn verify_manifest(
    manifest_path: &Path,
    algorithm: DigestAlgorithm,
    block_size: usize,
    mut sink: Option<&mut dyn Write>,
) -> Result<bool> {
    let file = File::open(manifest_path)
        .with_context(|| format!("open manifest {}", manifest_path.display()))?;
    let reader = BufReader::new(file);

    let mut passed = true;
    for line in reader.lines() {
        let line =
            line.with_context(|| format!("read manifest {}", manifest_path.display()))?;
        let Some(entry) = ManifestEntry::parse(&line) else {
            continue;
        };

        let path = entry.file_path.as_path();
        if !path.is_file() {
            if let Some(out) = sink.as_deref_mut() {
                writeln!(out, "{}: FILE_NOT_FOUND", path.display())?;
            }
            passed = false;
            continue;
        }

        if verify_path(&entry.expected_checksum, path, algorithm, block_size)? {
            if let Some(out) = sink.as_deref_mut() {
                writeln!(out, "{}: OK", path.display())?;
            }
        } else {
            if let Some(out) = sink.as_deref_mut() {
                writeln!(out, "{}: FAIL", path.display())?;
            }
            passed = false;
        }
    }

    Ok(passed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::{digest_path, DEFAULT_BLOCK_SIZE};
    use std::fs;

    #[test]
    fn parse_splits_on_first_whitespace_run() {
        let entry = ManifestEntry::parse("abc123  dir/file.txt\n").unwrap();
        assert_eq!(entry.expected_checksum, "abc123");
        assert_eq!(entry.file_path, PathBuf::from("dir/file.txt"));

        // Tabs count as separators; the path keeps interior whitespace.
        let entry = ManifestEntry::parse("abc123\tdir/with space.txt").unwrap();
        assert_eq!(entry.file_path, PathBuf::from("dir/with space.txt"));
    }

    #[test]
    fn parse_skips_blank_lines() {
        assert!(ManifestEntry::parse("").is_none());
        assert!(ManifestEntry::parse("   \n").is_none());
    }

    #[test]
    fn parse_line_without_separator_degrades_to_missing_lookup() {
        let entry = ManifestEntry::parse("abc123").unwrap();
        assert_eq!(entry.expected_checksum, "abc123");
        assert_eq!(entry.file_path, PathBuf::from("abc123"));
    }

    #[test]
    fn manifest_all_entries_pass() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, b"first").unwrap();
        fs::write(&b, b"second").unwrap();

        let sum_a = digest_path(&a, DigestAlgorithm::Sha256, DEFAULT_BLOCK_SIZE).unwrap();
        let sum_b = digest_path(&b, DigestAlgorithm::Sha256, DEFAULT_BLOCK_SIZE).unwrap();
        let manifest = dir.path().join("manifest.txt");
        fs::write(
            &manifest,
            format!("{sum_a}  {}\n{sum_b}  {}\n", a.display(), b.display()),
        )
        .unwrap();

        let mut report = Vec::new();
        let passed = verify_manifest(
            &manifest,
            DigestAlgorithm::Sha256,
            DEFAULT_BLOCK_SIZE,
            Some(&mut report),
        )
        .unwrap();
        assert!(passed);
        let report = String::from_utf8(report).unwrap();
        assert_eq!(
            report,
            format!("{}: OK\n{}: OK\n", a.display(), b.display())
        );
    }

    #[test]
    fn manifest_single_failure_keeps_walking() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.txt");
        let bad = dir.path().join("bad.txt");
        fs::write(&good, b"content").unwrap();
        fs::write(&bad, b"tampered").unwrap();

        let sum = digest_path(&good, DigestAlgorithm::Sha256, DEFAULT_BLOCK_SIZE).unwrap();
        let manifest = dir.path().join("manifest.txt");
        // Second entry reuses the first checksum, so it must FAIL; the
        // third entry is still verified after it.
        fs::write(
            &manifest,
            format!(
                "{sum}  {}\n{sum}  {}\n{sum}  {}\n",
                good.display(),
                bad.display(),
                good.display()
            ),
        )
        .unwrap();

        let mut report = Vec::new();
        let passed = verify_manifest(
            &manifest,
            DigestAlgorithm::Sha256,
            DEFAULT_BLOCK_SIZE,
            Some(&mut report),
        )
        .unwrap();
        assert!(!passed);
        let report = String::from_utf8(report).unwrap();
        assert_eq!(
            report,
            format!(
                "{}: OK\n{}: FAIL\n{}: OK\n",
                good.display(),
                bad.display(),
                good.display()
            )
        );
    }

    #[test]
    fn manifest_missing_file_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("present.txt");
        fs::write(&present, b"here").unwrap();
        let gone = dir.path().join("gone.txt");

        let sum = digest_path(&present, DigestAlgorithm::Sha256, DEFAULT_BLOCK_SIZE).unwrap();
        let manifest = dir.path().join("manifest.txt");
        fs::write(
            &manifest,
            format!("deadbeef  {}\n{sum}  {}\n", gone.display(), present.display()),
        )
        .unwrap();

        let mut report = Vec::new();
        let passed = verify_manifest(
            &manifest,
            DigestAlgorithm::Sha256,
            DEFAULT_BLOCK_SIZE,
            Some(&mut report),
        )
        .unwrap();
        assert!(!passed);
        let report = String::from_utf8(report).unwrap();
        assert_eq!(
            report,
            format!(
                "{}: FILE_NOT_FOUND\n{}: OK\n",
                gone.display(),
                present.display()
            )
        );
    }

    #[test]
    fn manifest_without_sink_returns_same_boolean() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, b"data").unwrap();

        let sum = digest_path(&file, DigestAlgorithm::Sha256, DEFAULT_BLOCK_SIZE).unwrap();
        let manifest = dir.path().join("manifest.txt");
        fs::write(&manifest, format!("{sum}  {}\n", file.display())).unwrap();
        assert!(
            verify_manifest(&manifest, DigestAlgorithm::Sha256, DEFAULT_BLOCK_SIZE, None).unwrap()
        );

        fs::write(&manifest, format!("badbad  {}\n", file.display())).unwrap();
        assert!(
            !verify_manifest(&manifest, DigestAlgorithm::Sha256, DEFAULT_BLOCK_SIZE, None).unwrap()
        );
    }

    #[test]
    fn manifest_open_failure_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing-manifest.txt");
        assert!(verify_manifest(
            &missing,
            DigestAlgorithm::Sha256,
            DEFAULT_BLOCK_SIZE,
            None
        )
        .is_err());
    }
}
