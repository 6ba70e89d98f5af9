//! Salted, cost-tunable password hashing built on bcrypt
//!
//! A salt is generated once per password and carries its own cost factor;
//! the stored hash embeds the salt, so verification needs nothing besides
//! the candidate password and the stored text.

pub mod hash;
pub mod salt;
pub mod verify;

// Re-export salt generation and its policy constants
pub use salt::{
    DEFAULT_COST, MAX_COST, MIN_COST, SALT_BYTES, SALT_TEXT_LEN, generate_salt,
    generate_salt_with_cost,
};
// Re-export hashing
pub use hash::{STORED_HASH_LEN, hash_password};
// Re-export verification and the comparison primitive
pub use verify::{constant_time_eq, verify_password};
