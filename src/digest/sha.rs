//! Digest functions from the SHA-2 and SHA-3 families
//!
//! Both families produce a 64-byte digest, rendered on request as padded
//! standard base64. These are plain fingerprints for arbitrary data;
//! password storage goes through [`crate::password`] instead.

use base64::{Engine, engine::general_purpose::STANDARD};
use sha2::{Digest, Sha512};
use sha3::Sha3_512;

/// Digest output size in bytes for both families
pub const DIGEST_BYTES: usize = 64;

/// Length of a base64-rendered digest in characters
pub const ENCODED_DIGEST_LEN: usize = 88;

/// Supported digest families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigestAlgorithm {
    /// SHA-512 from the SHA-2 family
    #[default]
    Sha512,
    /// SHA3-512 from the Keccak family
    Sha3_512,
}

// ============================================================================
// Generic Digest Functions
// ============================================================================

/// Compute a digest of data using the selected family
///
/// # Arguments
/// * `data` - Data to fingerprint
/// * `algorithm` - Digest family to use
///
/// # Returns
/// 64-byte digest
///
/// # Example
/// ```
/// use saltbox::digest::{DigestAlgorithm, digest};
///
/// let a = digest(b"Hello, World!", DigestAlgorithm::Sha512);
/// let b = digest(b"Hello, World!", DigestAlgorithm::Sha3_512);
/// assert_eq!(a.len(), 64);
/// assert_ne!(a, b);
/// ```
pub fn digest(data: &[u8], algorithm: DigestAlgorithm) -> [u8; DIGEST_BYTES] {
    match algorithm {
        DigestAlgorithm::Sha512 => sha512(data),
        DigestAlgorithm::Sha3_512 => sha3_512(data),
    }
}

/// Compute a digest and render it as base64 text
///
/// # Arguments
/// * `data` - Data to fingerprint
/// * `algorithm` - Digest family to use
///
/// # Returns
/// 88-character base64 string; the length is fixed regardless of input size
pub fn digest_base64(data: &[u8], algorithm: DigestAlgorithm) -> String {
    STANDARD.encode(digest(data, algorithm))
}

// ============================================================================
// SHA-512 Functions
// ============================================================================

/// Compute the SHA-512 digest of data
pub fn sha512(data: &[u8]) -> [u8; DIGEST_BYTES] {
    let mut hasher = Sha512::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the SHA-512 digest of data and render it as base64 text
pub fn sha512_base64(data: &[u8]) -> String {
    STANDARD.encode(sha512(data))
}

// ============================================================================
// SHA3-512 Functions
// ============================================================================

/// Compute the SHA3-512 digest of data
pub fn sha3_512(data: &[u8]) -> [u8; DIGEST_BYTES] {
    let mut hasher = Sha3_512::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the SHA3-512 digest of data and render it as base64 text
pub fn sha3_512_base64(data: &[u8]) -> String {
    STANDARD.encode(sha3_512(data))
}

// ============================================================================
// Tests
// ============================================================================
