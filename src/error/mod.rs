use thiserror::Error;

/// Error type for salt generation, password hashing and verification
///
/// Every variant is fatal to the operation that produced it: nothing in this
/// crate is retryable, and no partial result is ever returned.
#[derive(Error, Debug)]
pub enum Error {
    /// The system random source failed to deliver entropy
    #[error("Getrandom error: {0}")]
    GetrandomError(String),

    /// The bcrypt primitive rejected its input or failed internally
    #[error("Bcrypt error: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    /// A salt or stored hash was not in the expected textual format
    #[error("Encoding error: {0}")]
    EncodingError(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
