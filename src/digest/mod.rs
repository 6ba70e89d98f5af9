//! Unkeyed digest functions and their textual rendering
//!
//! Provides SHA-512 and SHA3-512 fingerprints of arbitrary data, rendered
//! as fixed-length base64 text.

pub mod sha;

// Re-export the digest family enum
pub use sha::DigestAlgorithm;
// Re-export generic digest functions
pub use sha::{digest, digest_base64};
// Re-export family-specific functions
pub use sha::{sha3_512, sha3_512_base64, sha512, sha512_base64};
// Re-export size constants
pub use sha::{DIGEST_BYTES, ENCODED_DIGEST_LEN};
