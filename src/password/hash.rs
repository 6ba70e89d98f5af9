//! Password hashing against a salt descriptor

use crate::{
    error::Result,
    password::salt::{SALT_TEXT_LEN, parse_salt},
};

/// Length of a stored hash in characters: a 29-character salt descriptor
/// followed by 31 characters of encoded hash output
pub const STORED_HASH_LEN: usize = 60;

/// Hash a password with a previously generated salt
///
/// The salt descriptor is read from the prefix of `salt`, so both a bare
/// salt and a full stored hash are accepted. Password length limits and
/// truncation are whatever the bcrypt primitive imposes; they are not
/// enforced here.
///
/// The version tag parsed from `salt` is re-emitted in the output, but the
/// hash itself is always computed with the primitive's modern (`2b`) key
/// schedule; see [`verify_password`](crate::verify_password) for the
/// compatibility caveat on legacy tags.
///
/// # Arguments
/// * `password` - Password to hash
/// * `salt` - Salt descriptor from [`generate_salt`](crate::generate_salt),
///   or a stored hash whose salt should be reused
///
/// # Returns
/// A 60-character stored hash embedding the salt descriptor it was given
///
/// # Example
/// ```
/// use saltbox::{generate_salt_with_cost, hash_password};
///
/// let salt = generate_salt_with_cost(4).unwrap();
/// let stored = hash_password("hunter2", &salt).unwrap();
/// assert_eq!(stored.len(), 60);
/// assert!(stored.starts_with(&salt));
/// ```
pub fn hash_password(password: &str, salt: &str) -> Result<String> {
    let parts = parse_salt(salt)?;
    let hashed = bcrypt::hash_with_salt(password, parts.cost, parts.bytes)?;

    // The primitive re-encodes the salt when it formats, so take only the
    // 31 hash characters from its output and keep the input's descriptor
    // text verbatim. Hashing with a stored hash as the salt then
    // reproduces that hash character for character.
    let formatted = hashed.format_for_version(parts.version);
    Ok(format!(
        "{}{}",
        &salt[..SALT_TEXT_LEN],
        &formatted[SALT_TEXT_LEN..]
    ))
}
