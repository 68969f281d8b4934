//! Path equivalence and key normalization.
//!
//! Keys stored in the history ring are path-like strings. Two keys name the
//! same place when the active [`PathEquivalence`] says so, which is not the
//! same thing as string equality: `~/notes/../work` and `/home/me/work` are the
//! same bookmark file.

use crate::config::Config;
use std::path::{Component, Path, PathBuf};

/// Decides whether two keys refer to the same location.
pub trait PathEquivalence {
    fn equivalent(&self, a: &str, b: &str) -> bool;
}

/// Produces the canonical key stored in the ring from a raw location.
pub trait KeyNormalizer {
    fn normalize(&self, raw: &str) -> String;
}

/// Plain string equality, no normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactPaths;

impl PathEquivalence for ExactPaths {
    fn equivalent(&self, a: &str, b: &str) -> bool {
        a == b
    }
}

impl KeyNormalizer for ExactPaths {
    fn normalize(&self, raw: &str) -> String {
        raw.to_string()
    }
}

/// Filesystem-aware equivalence.
///
/// Keys are compared after `~` expansion, resolution against the working
/// directory and lexical removal of `.` and `..`. Symlink resolution and case
/// folding are optional.
#[derive(Debug, Clone)]
pub struct NormalizedPaths {
    home: Option<PathBuf>,
    cwd: PathBuf,
    case_insensitive: bool,
    resolve_symlinks: bool,
    abbreviate_home: bool,
}

impl NormalizedPaths {
    /// Uses the user's home directory and the process working directory.
    pub fn new() -> Self {
        Self {
            home: dirs::home_dir(),
            cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/")),
            case_insensitive: false,
            resolve_symlinks: true,
            abbreviate_home: true,
        }
    }

    /// Builds the normalizer described by the user's configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .case_insensitive(config.case_insensitive)
            .resolve_symlinks(config.resolve_symlinks)
            .abbreviate_home(config.abbreviate_home)
    }

    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    pub fn case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = enabled;
        self
    }

    pub fn resolve_symlinks(mut self, enabled: bool) -> Self {
        self.resolve_symlinks = enabled;
        self
    }

    pub fn abbreviate_home(mut self, enabled: bool) -> Self {
        self.abbreviate_home = enabled;
        self
    }

    /// Expands `raw` into an absolute, lexically clean path.
    ///
    /// When symlink resolution is on and the path exists, the canonical
    /// filesystem path is returned instead.
    pub fn expand(&self, raw: &str) -> PathBuf {
        let expanded = match (&self.home, raw.strip_prefix('~')) {
            (Some(home), Some("")) => home.clone(),
            (Some(home), Some(rest)) if rest.starts_with('/') => {
                home.join(rest.trim_start_matches('/'))
            }
            _ => PathBuf::from(raw),
        };

        let absolute = if expanded.is_absolute() {
            expanded
        } else {
            self.cwd.join(expanded)
        };
        let clean = clean_path(&absolute);

        if self.resolve_symlinks {
            if let Ok(real) = std::fs::canonicalize(&clean) {
                return real;
            }
        }
        clean
    }

    fn comparable(&self, raw: &str) -> String {
        let path = self.expand(raw).to_string_lossy().into_owned();
        if self.case_insensitive {
            path.to_lowercase()
        } else {
            path
        }
    }
}

impl Default for NormalizedPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl PathEquivalence for NormalizedPaths {
    fn equivalent(&self, a: &str, b: &str) -> bool {
        a == b || self.comparable(a) == self.comparable(b)
    }
}

impl KeyNormalizer for NormalizedPaths {
    fn normalize(&self, raw: &str) -> String {
        let path = self.expand(raw);
        if self.abbreviate_home {
            if let Some(home) = &self.home {
                let home = clean_path(home);
                if let Ok(rest) = path.strip_prefix(&home) {
                    if rest.as_os_str().is_empty() {
                        return "~".to_string();
                    }
                    return format!("~/{}", rest.display());
                }
            }
        }
        path.to_string_lossy().into_owned()
    }
}

/// Removes `.` components and folds `..` into its parent without touching
/// the filesystem. `..` at the root stays at the root.
fn clean_path(path: &Path) -> PathBuf {
    let mut clean = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !clean.pop() && !clean.has_root() {
                    clean.push(component);
                }
            }
            other => clean.push(other),
        }
    }
    if clean.as_os_str().is_empty() {
        clean.push(".");
    }
    clean
}
