use thiserror::Error;

/// Errors raised around the core: reading samples and settings.
///
/// Inference and emission themselves never fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse {origin} at JSON path {path}: {message}")]
    Parse {
        origin: String,
        path: String,
        message: String,
    },

    #[error("JSON pointer `{pointer}` selects nothing in {origin}")]
    Pointer { origin: String, pointer: String },

    #[error("unknown target language `{0}` (expected csharp, typescript or jsdoc)")]
    UnknownTarget(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
