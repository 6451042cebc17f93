use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigError {
    /// File could not be read or written.
    Io { path: PathBuf, message: String },
    /// JSON / TOML parse or deserialization error.
    Parse(String),
    /// File extension is neither `.json` nor `.toml`.
    UnsupportedFormat(PathBuf),
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "{}: {message}", path.display()),
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::UnsupportedFormat(path) => {
                write!(
                    f,
                    "{}: unsupported config format (expected .json or .toml)",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
