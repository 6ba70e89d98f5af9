//! Saltbox Password Hashing Library
//!
//! This library provides salted, cost-tunable password hashing built on the
//! bcrypt adaptive hash, together with SHA-512 and SHA3-512 text
//! fingerprints.
//!
//! Salts and stored hashes are self-describing printable strings: a salt
//! carries its bcrypt version tag, cost factor and random bytes, and a
//! stored hash embeds the exact salt it was created with, so verification
//! needs nothing besides the candidate password and the stored text.
//! Verification compares hashes in constant time.
//!
//! # Example
//! ```
//! use saltbox::{digest_base64, generate_salt_with_cost, hash_password,
//!               verify_password, DigestAlgorithm};
//!
//! // Password storage
//! let salt = generate_salt_with_cost(4).unwrap();
//! let stored = hash_password("hunter2", &salt).unwrap();
//! assert!(verify_password("hunter2", &stored).unwrap());
//!
//! // Text fingerprinting
//! let tag = digest_base64(b"some document", DigestAlgorithm::Sha3_512);
//! assert_eq!(tag.len(), 88);
//! ```

pub mod digest;
pub mod error;
pub mod password;

// Re-export commonly used items for convenience
pub use digest::{
    DigestAlgorithm, digest, digest_base64, sha3_512, sha3_512_base64, sha512, sha512_base64,
};
pub use error::{Error, Result};
pub use password::{
    DEFAULT_COST, MAX_COST, MIN_COST, STORED_HASH_LEN, constant_time_eq, generate_salt,
    generate_salt_with_cost, hash_password, verify_password,
};
