//! OS helper models and top-level error types.

use std::fmt;
use std::path::PathBuf;

////////////////////////////////////////////////////////////////////////////////
// #region OsFamily

/// Operating-system family recognized by the helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumOsFamily {
    /// Windows family.
    Windows,
    /// Linux family.
    Linux,
    /// macOS family.
    MacOs,
    /// Any other platform; the file opener rejects it explicitly.
    Other,
}

impl EnumOsFamily {
    /// Detect family of the current process from `std::env::consts::OS`.
    pub fn detect() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map an `std::env::consts::OS`-style name onto a family.
    pub fn from_os_name(os_name: &str) -> Self {
        match os_name {
            "windows" => Self::Windows,
            "linux" => Self::Linux,
            "macos" => Self::MacOs,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for EnumOsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::MacOs => "macos",
            Self::Other => "other",
        };
        write!(f, "{name}")
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region EnvPlan

/// Input options for `derive_env_plan`.
#[derive(Debug, Clone, Default)]
pub struct SpecEnvOptions {
    /// Re-point the renderer's cache home at a private directory.
    pub if_reinit_cache_home: bool,
    /// Cache directory override; falls back to a temp-dir subdirectory.
    pub dir_cache: Option<PathBuf>,
}

/// Derived set of environment variables for the rendering stack.
///
/// The plan is data only; nothing is mutated until [`crate::apply_env_plan`]
/// is called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecEnvPlan {
    /// `(name, value)` pairs to set when currently unset.
    pub vars: Vec<(String, String)>,
}

impl SpecEnvPlan {
    /// `true` when the plan sets nothing.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region OpenCommand

/// Resolved platform open command (program + argument list).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecOpenCommand {
    /// Executable name.
    pub program: String,
    /// Arguments, target path included.
    pub args: Vec<String>,
}

/// "Open with default application" failures.
#[derive(Debug)]
pub enum OpenFileError {
    /// Current platform has no recognized open command.
    UnsupportedPlatform(EnumOsFamily),
    /// Target path did not resolve to an existing absolute path.
    PathNotFound(PathBuf),
    /// Open command could not be spawned.
    SpawnFailed {
        /// Resolved target path.
        path: PathBuf,
        /// Underlying spawn error text.
        message: String,
    },
}

impl fmt::Display for OpenFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedPlatform(family) => {
                write!(f, "No default-application open command for platform: {family}")
            }
            Self::PathNotFound(path) => {
                write!(f, "Path does not resolve: {}", path.display())
            }
            Self::SpawnFailed { path, message } => {
                write!(f, "Failed to spawn open command for {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for OpenFileError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////
