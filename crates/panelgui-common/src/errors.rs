use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Problems decoding an exported panel snapshot.
///
/// The engine never surfaces these to command callers; they are logged
/// and the import degrades to a no-op.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Malformed(String),

    #[error("snapshot is missing field '{0}'")]
    MissingField(&'static str),

    #[error("unknown element type '{0}'")]
    UnknownElementType(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PanelGuiError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("script error on line {line}: {message}")]
    Script { line: usize, message: String },

    #[error("{0}")]
    Other(String),
}
