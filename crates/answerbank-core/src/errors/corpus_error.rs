/// Knowledge base load/save errors. Fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("corpus unreadable: {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("corpus malformed: {path}: {reason}")]
    Malformed { path: String, reason: String },

    #[error("corpus unwritable: {path}: {reason}")]
    Unwritable { path: String, reason: String },
}
