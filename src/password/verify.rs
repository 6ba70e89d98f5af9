//! Password verification and timing-safe comparison

use std::hint::black_box;

use crate::{
    error::{Error, Result},
    password::hash::{STORED_HASH_LEN, hash_password},
};

/// Check a password against a stored bcrypt hash
///
/// The stored hash doubles as the salt descriptor: the candidate password is
/// hashed with the same cost and salt bytes, and the two strings are
/// compared in constant time.
///
/// Legacy version tags (`2a`, `2x`, `2y`) are accepted, but the candidate
/// is always recomputed with the primitive's modern (`2b`) key schedule,
/// which agrees with those variants only for passwords of 72 or fewer
/// ASCII bytes. A hash minted by a genuine `2a`/`2x` implementation for a
/// password containing high-bit bytes may fail to verify here.
///
/// # Returns
/// `Ok(true)` on a match, `Ok(false)` on a mismatch, and `Err` when the
/// stored hash is malformed or rehashing fails. An error means the result
/// is undetermined; callers must not treat it as either outcome.
///
/// # Example
/// ```
/// use saltbox::{generate_salt_with_cost, hash_password, verify_password};
///
/// let salt = generate_salt_with_cost(4).unwrap();
/// let stored = hash_password("hunter2", &salt).unwrap();
/// assert!(verify_password("hunter2", &stored).unwrap());
/// assert!(!verify_password("*******", &stored).unwrap());
/// ```
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool> {
    if stored_hash.len() != STORED_HASH_LEN {
        return Err(Error::EncodingError(format!(
            "stored hash must be {} characters, got {}",
            STORED_HASH_LEN,
            stored_hash.len()
        )));
    }

    let candidate = hash_password(password, stored_hash)?;
    Ok(constant_time_eq(&candidate, stored_hash))
}

/// Compare two hash strings without leaking where they differ
///
/// Inputs of different lengths compare unequal immediately; length is not
/// treated as secret because both inputs are fixed-format hash strings, and
/// a mismatch only occurs on malformed input. For equal lengths every byte
/// pair is XORed into an accumulator with no early exit, and the
/// accumulator is routed through `black_box` each step so the optimizer
/// cannot collapse the loop into an ordinary short-circuiting comparison.
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();

    if a.len() != b.len() {
        return false;
    }

    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b) {
        diff = black_box(diff | (x ^ y));
    }
    diff == 0
}
