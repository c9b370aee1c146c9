use std::io;
use std::path::{Path, PathBuf};

use crate::core::config::SecurityConfig;

/// Errors that can occur during output path validation
#[derive(Debug, thiserror::Error)]
pub enum PathSecurityError {
    #[error("Output path '{path}' does not name a file")]
    NotAFile { path: PathBuf },

    #[error("Path '{path}' is outside allowed root directory '{root}'")]
    OutsideRootDirectory { path: PathBuf, root: PathBuf },

    #[error("Symlink '{path}' points outside allowed root directory")]
    SymlinkOutsideRoot { path: PathBuf },

    #[error("Refusing to write through symlink '{path}'")]
    SymlinkNotAllowed { path: PathBuf },

    #[error("Parent directory does not exist: '{path}'")]
    ParentNotFound { path: PathBuf },

    #[error("IO error for path '{path}': {error}")]
    IoError { path: PathBuf, error: io::Error },
}

/// Validates a path that an artifact is about to be written to.
///
/// The file itself does not need to exist. Checks performed:
/// 1. The path names a file, not a directory
/// 2. Existing symlinks are rejected unless the policy allows them
/// 3. The parent directory exists
/// 4. If a root path is configured, the canonical parent directory (and any
///    symlink target) must be inside it
///
/// Without a configured root the path is returned unchanged.
///
/// # Examples
///
/// ```rust,ignore
/// let config = Config::from_env();
/// let out = validate_output_path("/home/user/harness/diagram.png", &config.security)?;
/// ```
pub fn validate_output_path(
    input_path: &str,
    security: &SecurityConfig,
) -> Result<PathBuf, PathSecurityError> {
    let path = Path::new(input_path);

    let file_name = match path.file_name() {
        Some(name) if !input_path.ends_with('/') && !path.is_dir() => name.to_owned(),
        _ => {
            return Err(PathSecurityError::NotAFile {
                path: path.to_path_buf(),
            });
        }
    };

    if path.is_symlink() && !security.allow_symlinks {
        return Err(PathSecurityError::SymlinkNotAllowed {
            path: path.to_path_buf(),
        });
    }

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let Some(ref root) = security.root_path else {
        if !parent.is_dir() {
            return Err(PathSecurityError::ParentNotFound {
                path: parent.to_path_buf(),
            });
        }
        return Ok(path.to_path_buf());
    };

    let canonical_root = root.canonicalize().map_err(|e| PathSecurityError::IoError {
        path: root.clone(),
        error: e,
    })?;

    let canonical_parent = parent.canonicalize().map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            PathSecurityError::ParentNotFound {
                path: parent.to_path_buf(),
            }
        } else {
            PathSecurityError::IoError {
                path: parent.to_path_buf(),
                error: e,
            }
        }
    })?;

    if !canonical_parent.starts_with(&canonical_root) {
        return Err(PathSecurityError::OutsideRootDirectory {
            path: canonical_parent.join(&file_name),
            root: canonical_root,
        });
    }

    // A dangling link cannot be canonicalized; writing through it would
    // create the target wherever it points.
    if path.is_symlink() {
        let within = path
            .canonicalize()
            .map(|target| target.starts_with(&canonical_root))
            .unwrap_or(false);
        if !within {
            return Err(PathSecurityError::SymlinkOutsideRoot {
                path: path.to_path_buf(),
            });
        }
    }

    Ok(canonical_parent.join(file_name))
}
