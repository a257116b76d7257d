use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddrError {
    /// Input does not match the expected grammar or numeric range
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// The address-to-text conversion failed unexpectedly
    #[error("Unable to convert address to text: `{0}`")]
    FormatError(String),
}

impl AddrError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        AddrError::InvalidFormat(msg.into())
    }
}
