//! CLI for the glacial cold-storage upload toolkit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use glacial_core::catalog::Catalog;
use glacial_core::config;
use std::path::Path;

use commands::{
    run_add, run_archive, run_chunk_size, run_digest, run_mark, run_remove, run_status,
    run_verify,
};

/// Top-level CLI for the glacial upload toolkit.
#[derive(Debug, Parser)]
#[command(name = "glacial")]
#[command(about = "glacial: checksum verification and multipart sizing for cold-storage uploads", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Compute a file's digest.
    Digest {
        /// Path to the file.
        path: String,

        /// Digest algorithm: sha1, sha256, sha384, sha512, or md5.
        #[arg(long)]
        algorithm: Option<String>,
    },

    /// Verify a checksum manifest (one `<checksum> <path>` per line).
    Verify {
        /// Path to the manifest.
        manifest: String,

        /// Digest algorithm: sha1, sha256, sha384, sha512, or md5.
        #[arg(long)]
        algorithm: Option<String>,

        /// Read block size in bytes.
        #[arg(long, value_name = "BYTES")]
        block_size: Option<usize>,
    },

    /// Compute the multipart chunk size for an archive.
    ChunkSize {
        /// Path to the archive file (its length is used).
        path: Option<String>,

        /// Archive size in bytes, instead of a path.
        #[arg(long, value_name = "N", conflicts_with = "path")]
        bytes: Option<u64>,

        /// Record the decision against this catalog archive id.
        #[arg(long, value_name = "ID")]
        archive: Option<i64>,
    },

    /// Record an archive in the catalog.
    Archive {
        /// Service-assigned archive identifier.
        archive_id: String,

        /// Free-form description.
        #[arg(long)]
        description: Option<String>,
    },

    /// Register a file for sync into a vault.
    Add {
        /// Path to the source file.
        source: String,

        /// Vault name (falls back to the configured default).
        #[arg(long)]
        vault: Option<String>,

        /// Stored name (defaults to the source file name).
        #[arg(long)]
        name: Option<String>,
    },

    /// Show catalog archives and tracked files.
    Status,

    /// Set the sync status of a tracked file.
    Mark {
        /// Tracked file identifier.
        id: i64,

        /// New status: pending, synced, or failed.
        status: String,
    },

    /// Remove a tracked file from the catalog.
    Remove {
        /// Tracked file identifier.
        id: i64,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let db = Catalog::open_default().await?;

        match cli.command {
            CliCommand::Digest { path, algorithm } => {
                run_digest(&cfg, Path::new(&path), algorithm.as_deref()).await?
            }
            CliCommand::Verify {
                manifest,
                algorithm,
                block_size,
            } => run_verify(&cfg, Path::new(&manifest), algorithm.as_deref(), block_size).await?,
            CliCommand::ChunkSize {
                path,
                bytes,
                archive,
            } => run_chunk_size(&db, path.as_deref().map(Path::new), bytes, archive).await?,
            CliCommand::Archive {
                archive_id,
                description,
            } => run_archive(&db, &archive_id, description.as_deref()).await?,
            CliCommand::Add {
                source,
                vault,
                name,
            } => {
                run_add(
                    &db,
                    &cfg,
                    Path::new(&source),
                    vault.as_deref(),
                    name.as_deref(),
                )
                .await?
            }
            CliCommand::Status => run_status(&db).await?,
            CliCommand::Mark { id, status } => run_mark(&db, id, &status).await?,
            CliCommand::Remove { id } => run_remove(&db, id).await?,
        }

        Ok(())
    }
}
