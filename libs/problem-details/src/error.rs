//! Error surface of the crate.

/// Failure while attaching an extension member to a problem under construction.
///
/// Adding an extension is the only validated operation in the crate; every
/// other input is taken as-is.
#[derive(Debug, thiserror::Error)]
pub enum ExtensionError {
    /// The extension key shadows one of the five RFC 9457 base fields
    /// (`type`, `status`, `title`, `detail`, `instance`).
    #[error("`{0}` is reserved by an existing problem field")]
    ReservedKey(String),

    /// The extension value could not be encoded as JSON. Carries the encoder
    /// error unmodified.
    #[error(transparent)]
    Value(#[from] serde_json::Error),
}
