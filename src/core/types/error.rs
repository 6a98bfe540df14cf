use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias used by every fallible operation in the crate.
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid or missing arguments, detected before any side effect.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A required external helper could not be found by filesystem search.
    #[error("cannot find external tool '{0}'")]
    ToolNotFound(String),

    /// No reference automaton matched the derived prefix. Recoverable:
    /// callers skip the offending item and continue.
    #[error("cannot find reference automaton matching \"{0}\"")]
    Lookup(String),

    /// The artifact id space for one core/extension pair is used up.
    #[error("no free artifact name for '{core}' after {attempts} attempts")]
    NamingExhausted { core: String, attempts: usize },

    /// Significance export against an empty sample corpus.
    #[error("total sample count in '{0}' is zero")]
    ZeroSampleCount(PathBuf),

    /// A state-metric file line that does not parse as `<state> <value>`.
    #[error("{file}:{line}: invalid metric line: {reason}")]
    MetricParse {
        file: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("glob expansion failed: {0}")]
    Glob(#[from] glob::GlobError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
