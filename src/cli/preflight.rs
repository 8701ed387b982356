use std::fmt;
use std::path::{Path, PathBuf};

use crate::cli::config::StubConfig;

// ============================================================================
// Directory/file permission checks, run before any work begins
// ============================================================================

/// A preflight failure. `Invalid` is a user-fixable configuration
/// problem (exit 2); `Unexpected` is an I/O error the check itself hit
/// (exit 1).
#[derive(Debug)]
pub enum PreflightError {
    Invalid {
        option: &'static str,
        path: PathBuf,
        problem: String,
    },
    Unexpected {
        option: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
}

impl PreflightError {
    pub fn exit_code(&self) -> i32 {
        match self {
            PreflightError::Invalid { .. } => 2,
            PreflightError::Unexpected { .. } => 1,
        }
    }
}

impl fmt::Display for PreflightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreflightError::Invalid {
                option,
                path,
                problem,
            } => {
                write!(f, "{}: {} {}", option, path.display(), problem)
            }
            PreflightError::Unexpected {
                option,
                path,
                source,
            } => {
                write!(
                    f,
                    "{}: error while checking {}: {}",
                    option,
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for PreflightError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PreflightError::Unexpected { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ============================================================================
// Per-command preflight
// ============================================================================

/// Checks for `stub-pages`: both source directories must exist and be
/// readable/traversable, the output directory must exist and be
/// writable.
pub fn preflight_stub(config: &StubConfig, output_directory: &Path) -> Result<(), PreflightError> {
    check_dir_readable("--page-directory", &config.page_directory)?;
    check_dir_readable("--template-directory", &config.template_directory)?;
    check_dir_writable("--output-directory", output_directory, true)?;
    Ok(())
}

/// Checks for `initialize`: explicit default directories must exist and
/// be readable; target directories must be writable if they already
/// exist (they are created otherwise).
pub fn preflight_initialize(
    config: &StubConfig,
    default_pages: Option<&Path>,
    default_templates: Option<&Path>,
) -> Result<(), PreflightError> {
    if let Some(dir) = default_pages {
        check_dir_readable("--default-pages-directory", dir)?;
    }
    if let Some(dir) = default_templates {
        check_dir_readable("--default-templates-directory", dir)?;
    }
    check_dir_writable("--page-directory", &config.page_directory, false)?;
    check_dir_writable("--template-directory", &config.template_directory, false)?;
    Ok(())
}

// ============================================================================
// Individual checks
// ============================================================================

fn check_dir_readable(option: &'static str, path: &Path) -> Result<(), PreflightError> {
    let meta = metadata(option, path)?.ok_or_else(|| invalid(option, path, "does not exist"))?;

    if !meta.is_dir() {
        return Err(invalid(option, path, "is not a directory"));
    }
    if !mode_allows(&meta, 0o444) {
        return Err(invalid(option, path, "is not readable"));
    }
    if !mode_allows(&meta, 0o111) {
        return Err(invalid(option, path, "is not executable"));
    }
    Ok(())
}

fn check_dir_writable(
    option: &'static str,
    path: &Path,
    must_exist: bool,
) -> Result<(), PreflightError> {
    let Some(meta) = metadata(option, path)? else {
        if must_exist {
            return Err(invalid(option, path, "does not exist"));
        }
        return Ok(());
    };

    if !meta.is_dir() {
        return Err(invalid(option, path, "is not a directory"));
    }
    if !writable(&meta) {
        return Err(invalid(option, path, "is not writable"));
    }
    Ok(())
}

/// Stat a path. `Ok(None)` means it does not exist; any other failure
/// is an unexpected error in the check itself.
fn metadata(
    option: &'static str,
    path: &Path,
) -> Result<Option<std::fs::Metadata>, PreflightError> {
    match std::fs::metadata(path) {
        Ok(meta) => Ok(Some(meta)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(PreflightError::Unexpected {
            option,
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

fn invalid(option: &'static str, path: &Path, problem: &str) -> PreflightError {
    PreflightError::Invalid {
        option,
        path: path.to_path_buf(),
        problem: problem.to_string(),
    }
}

#[cfg(unix)]
fn mode_allows(meta: &std::fs::Metadata, bits: u32) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & bits != 0
}

#[cfg(not(unix))]
fn mode_allows(_meta: &std::fs::Metadata, _bits: u32) -> bool {
    true
}

#[cfg(unix)]
fn writable(meta: &std::fs::Metadata) -> bool {
    mode_allows(meta, 0o222)
}

#[cfg(not(unix))]
fn writable(meta: &std::fs::Metadata) -> bool {
    !meta.permissions().readonly()
}
