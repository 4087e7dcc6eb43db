//! Secrets loading: key=value files applied to the process environment.
//!
//! An orchestrator may mount secrets under `/run/secrets`; when a file
//! named `<stem>_secrets` exists there it takes precedence over the local
//! path handed to [`load`].

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory where orchestrator-provided secrets are mounted.
const RUN_SECRETS_DIR: &str = "/run/secrets";

/// Resolve the effective secrets path: `/run/secrets/<stem>_secrets` when
/// present, else `path` unchanged. `<stem>` is the file name with a
/// trailing `.secret` extension stripped.
pub fn resolve_path(path: &Path) -> PathBuf {
    let Some(name) = path.file_name() else {
        return path.to_path_buf();
    };
    let name = name.to_string_lossy();
    let stem = name.strip_suffix(".secret").unwrap_or(&name);
    let mounted = Path::new(RUN_SECRETS_DIR).join(format!("{stem}_secrets"));
    if mounted.is_file() {
        mounted
    } else {
        path.to_path_buf()
    }
}

/// Load `KEY=value` pairs from the secrets file at `path` (after
/// [`resolve_path`]). Values are split on the first `=`, so they may
/// themselves contain `=`. Blank lines are skipped; lines without `=` are
/// skipped with a warning (which names the file, never the content).
pub fn load(path: &Path) -> Result<HashMap<String, String>> {
    let resolved = resolve_path(path);
    let data = fs::read_to_string(&resolved)
        .with_context(|| format!("read secrets {}", resolved.display()))?;

    let mut secrets = HashMap::new();
    for line in data.lines() {
        if line.is_empty() {
            continue;
        }
        match line.split_once('=') {
            Some((key, value)) => {
                secrets.insert(key.to_string(), value.to_string());
            }
            None => {
                tracing::warn!("ignoring malformed secrets line in {}", resolved.display());
            }
        }
    }
    Ok(secrets)
}

/// Export every pair into the process environment.
pub fn set_env(secrets: &HashMap<String, String>) {
    for (key, value) in secrets {
        env::set_var(key, value);
    }
}

/// Remove every key from the process environment.
pub fn unset_env(secrets: &HashMap<String, String>) {
    for key in secrets.keys() {
        env::remove_var(key);
    }
}
