use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextError {
    /// The component tree could not be serialized to the wire form.
    ///
    /// This indicates a malformed document, not an environment limitation,
    /// and is surfaced to the caller rather than downgraded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TextError>;
