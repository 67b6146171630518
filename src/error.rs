use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BifrostError {
    #[error("config.bifrost not found in {}", path.display())]
    ProjectConfigNotFound { path: PathBuf },

    #[error("Plugin \"{0}\" not found in registry")]
    PluginNotFound(String),

    #[error("Platform mismatch: plugin is for {plugin}, but project is {project}")]
    PlatformMismatch { plugin: String, project: String },

    #[error("Registry not found (looked in: {searched})")]
    RegistryNotFound { searched: String },

    #[error("Failed to fetch {resource}: {status} ({url})")]
    FetchFailed {
        resource: String,
        url: String,
        status: String,
    },

    #[error("Network error for {url}: {reason}")]
    Network { url: String, reason: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Parsing error in '{file}': {message}")]
    ParseError { file: String, message: String },

    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    StdIoError(#[from] std::io::Error),

    /// Manifest-supplied path or name that would escape the project or the plugin repo
    #[error("Unsafe input rejected: {0}")]
    UnsafeInput(String),

    #[error("System command '{command}' failed: {reason}")]
    SystemCommandFailed { command: String, reason: String },

    #[error("Package manager error: {0}")]
    PackageManagerError(String),

    #[error("Operation interrupted by user")]
    Interrupted,

    #[error("Installation cancelled")]
    Cancelled,

    #[error("{0}")]
    Other(String),
}

impl BifrostError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BifrostError::IoError {
            path: path.into(),
            source,
        }
    }

    /// Errors raised before anything on disk changed.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            BifrostError::ProjectConfigNotFound { .. }
                | BifrostError::PluginNotFound(_)
                | BifrostError::PlatformMismatch { .. }
                | BifrostError::RegistryNotFound { .. }
        )
    }

    /// User-initiated stops that exit with status 0.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, BifrostError::Interrupted | BifrostError::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, BifrostError>;
