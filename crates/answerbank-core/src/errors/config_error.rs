/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config unreadable: {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("config parse error: {reason}")]
    Parse { reason: String },
}
