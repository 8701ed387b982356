use std::path::{Path, PathBuf};

use crate::error::StubError;

// ============================================================================
// Non-destructive seeding of working directories
// ============================================================================

/// Default suffix for the sibling file written when a target diverged.
pub const NEW_SUFFIX: &str = ".new";

/// A file to be materialized: a name relative to some target directory
/// plus its content bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileArtifact {
    pub name: String,
    pub content: Vec<u8>,
}

impl FileArtifact {
    pub fn new(name: &str, content: impl Into<Vec<u8>>) -> Self {
        FileArtifact {
            name: name.to_string(),
            content: content.into(),
        }
    }
}

/// What a collision-safe copy actually did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Target did not exist; data was written to it
    Written,
    /// Target already held exactly these bytes; nothing was written
    Unchanged,
    /// Target held different bytes; data went to the suffixed sibling
    Diverged(PathBuf),
}

/// Write `data` to `target` without ever destroying different
/// pre-existing content.
///
/// - absent target: plain write
/// - byte-identical target: no-op
/// - diverged target: write to the sibling with the extension replaced
///   by `suffix`, overwriting any previous sibling
///
/// Fails before any write if `target`'s extension already equals
/// `suffix` — that would make the default and the override collide on
/// the next run.
pub fn copy_with_possible_suffix(
    data: &[u8],
    target: &Path,
    suffix: &str,
) -> Result<CopyOutcome, StubError> {
    let ext = suffix.trim_start_matches('.');
    if target.extension().is_some_and(|e| e == ext) {
        return Err(StubError::SuffixCollision {
            path: target.to_path_buf(),
            suffix: suffix.to_string(),
        });
    }

    if !target.exists() {
        write_bytes(target, data)?;
        return Ok(CopyOutcome::Written);
    }

    let existing = std::fs::read(target).map_err(|e| io_err(target, e))?;
    if existing == data {
        return Ok(CopyOutcome::Unchanged);
    }

    let sibling = target.with_extension(ext);
    write_bytes(&sibling, data)?;
    Ok(CopyOutcome::Diverged(sibling))
}

/// Seed `target_dir` with the given artifacts through the collision-
/// safe copy rule. Creates the directory if needed (idempotent).
pub fn seed_artifacts(
    artifacts: &[FileArtifact],
    target_dir: &Path,
) -> Result<Vec<(PathBuf, CopyOutcome)>, StubError> {
    std::fs::create_dir_all(target_dir).map_err(|e| io_err(target_dir, e))?;

    let mut outcomes = Vec::new();
    for artifact in artifacts {
        let target = target_dir.join(&artifact.name);
        let outcome = copy_with_possible_suffix(&artifact.content, &target, NEW_SUFFIX)?;
        outcomes.push((target, outcome));
    }
    Ok(outcomes)
}

/// Seed `target_dir` from the regular files directly inside
/// `source_dir`. Non-recursive: subdirectories are ignored.
pub fn seed_dir(
    source_dir: &Path,
    target_dir: &Path,
) -> Result<Vec<(PathBuf, CopyOutcome)>, StubError> {
    let artifacts = read_dir_artifacts(source_dir)?;
    seed_artifacts(&artifacts, target_dir)
}

/// Seed both working directories from their default source directories.
///
/// Not transactional across files: a failure partway through leaves the
/// targets partially populated, which is acceptable because each copy
/// is independently safe.
pub fn initialize(
    default_pages_dir: &Path,
    pages_target: &Path,
    default_templates_dir: &Path,
    templates_target: &Path,
) -> Result<Vec<(PathBuf, CopyOutcome)>, StubError> {
    let mut outcomes = seed_dir(default_pages_dir, pages_target)?;
    outcomes.extend(seed_dir(default_templates_dir, templates_target)?);
    Ok(outcomes)
}

/// Collect the direct regular-file children of a directory, sorted by
/// name for deterministic order.
pub fn read_dir_artifacts(source_dir: &Path) -> Result<Vec<FileArtifact>, StubError> {
    let mut artifacts = Vec::new();
    let entries = std::fs::read_dir(source_dir).map_err(|e| io_err(source_dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| io_err(source_dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let content = std::fs::read(&path).map_err(|e| io_err(&path, e))?;
        artifacts.push(FileArtifact::new(name, content));
    }

    artifacts.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(artifacts)
}

fn write_bytes(path: &Path, data: &[u8]) -> Result<(), StubError> {
    std::fs::write(path, data).map_err(|e| io_err(path, e))
}

fn io_err(path: &Path, source: std::io::Error) -> StubError {
    StubError::Io {
        path: path.to_path_buf(),
        source,
    }
}
