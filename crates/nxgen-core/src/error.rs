use std::path::PathBuf;

/// Errors raised while building answers, loading config or rendering templates.
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    /// An answer was rejected by its validation rule set.
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// A destination path referenced a `{token}` with no matching answer.
    #[error("no answer for placeholder '{{{token}}}' in destination '{destination}'")]
    MissingPlaceholder { token: String, destination: String },

    /// A manifest entry points at a source file missing from the template directory.
    #[error("template source not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    /// Tera failed to parse or render a template.
    #[error("failed to render template '{name}'")]
    Template {
        name: String,
        #[source]
        source: tera::Error,
    },

    /// The project directory already exists and is not empty.
    #[error("destination already exists and is not empty: {} (use --force to overwrite)", .0.display())]
    DestinationExists(PathBuf),

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

impl ScaffoldError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
