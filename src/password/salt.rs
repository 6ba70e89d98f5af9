//! Salt generation and the textual salt descriptor format
//!
//! A salt descriptor is 29 characters of printable text carrying the bcrypt
//! version tag, the cost factor and 16 random bytes, e.g.
//! `$2b$10$N9qo8uLOickgx2ZMRZoMye`. The random bytes come from the operating
//! system; the cost falls back to [`DEFAULT_COST`] when out of range.

use base64::{
    Engine,
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use bcrypt::Version;

use crate::error::{Error, Result};

/// Smallest cost factor bcrypt accepts (2^4 rounds)
pub const MIN_COST: u32 = 4;

/// Largest cost factor bcrypt accepts (2^31 rounds)
pub const MAX_COST: u32 = 31;

/// Cost used when the caller asks for none, or for one outside
/// [`MIN_COST`]..=[`MAX_COST`]
pub const DEFAULT_COST: u32 = 10;

/// Number of random bytes in a salt
pub const SALT_BYTES: usize = 16;

/// Length of a salt descriptor in characters
pub const SALT_TEXT_LEN: usize = 29;

/// Version tag written into freshly generated salts
const SALT_VERSION: Version = Version::TwoB;

/// bcrypt's base64 variant: `./A-Za-z0-9` alphabet, no padding. The last
/// character of a 22-character salt carries 4 spare bits, so decoding must
/// tolerate nonzero trailing bits to accept salts minted elsewhere.
pub(crate) const BCRYPT_B64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::BCRYPT,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone),
);

/// Generate a fresh salt with the default cost
///
/// # Returns
/// A 29-character salt descriptor for [`hash_password`](crate::hash_password)
///
/// # Example
/// ```
/// use saltbox::generate_salt;
///
/// let salt = generate_salt().unwrap();
/// assert_eq!(salt.len(), 29);
/// assert!(salt.starts_with("$2b$10$"));
/// ```
pub fn generate_salt() -> Result<String> {
    generate_salt_with_cost(DEFAULT_COST)
}

/// Generate a fresh salt with the given cost
///
/// # Arguments
/// * `cost` - Work factor; hashing cost doubles with each increment
///
/// # Returns
/// A 29-character salt descriptor embedding `cost`, or [`DEFAULT_COST`] if
/// `cost` lies outside [`MIN_COST`]..=[`MAX_COST`]
pub fn generate_salt_with_cost(cost: u32) -> Result<String> {
    let mut random = [0u8; SALT_BYTES];
    getrandom::fill(&mut random).map_err(|e| Error::GetrandomError(e.to_string()))?;

    // An out-of-range cost is replaced with the default rather than
    // rejected, the same policy as crypt_gensalt. Callers that want a hard
    // failure must range-check before calling.
    let cost = if (MIN_COST..=MAX_COST).contains(&cost) {
        cost
    } else {
        DEFAULT_COST
    };

    Ok(format!(
        "${}${:02}${}",
        SALT_VERSION,
        cost,
        BCRYPT_B64.encode(random)
    ))
}

/// Parsed fields of a salt descriptor
pub(crate) struct SaltParts {
    pub version: Version,
    pub cost: u32,
    pub bytes: [u8; SALT_BYTES],
}

/// Split a salt descriptor into its fields.
///
/// Only the first [`SALT_TEXT_LEN`] characters are examined, so a full
/// stored hash is accepted wherever a salt is expected. That is how
/// verification recovers the salt a hash was created with.
pub(crate) fn parse_salt(text: &str) -> Result<SaltParts> {
    let raw = text.as_bytes();
    if raw.len() < SALT_TEXT_LEN || !text.is_ascii() {
        return Err(Error::EncodingError(
            "salt is too short or not ASCII".to_string(),
        ));
    }
    if raw[0] != b'$' || raw[3] != b'$' || raw[6] != b'$' {
        return Err(Error::EncodingError(
            "salt is missing its '$' separators".to_string(),
        ));
    }

    let version = match &text[1..3] {
        "2a" => Version::TwoA,
        "2b" => Version::TwoB,
        "2x" => Version::TwoX,
        "2y" => Version::TwoY,
        tag => {
            return Err(Error::EncodingError(format!(
                "unsupported bcrypt version tag: {}",
                tag
            )));
        }
    };

    if !raw[4].is_ascii_digit() || !raw[5].is_ascii_digit() {
        return Err(Error::EncodingError(
            "cost field is not two digits".to_string(),
        ));
    }
    let cost = u32::from(raw[4] - b'0') * 10 + u32::from(raw[5] - b'0');

    let encoded = &text[7..SALT_TEXT_LEN];
    let decoded = BCRYPT_B64
        .decode(encoded)
        .map_err(|e| Error::EncodingError(format!("salt is not valid bcrypt base64: {}", e)))?;
    let bytes: [u8; SALT_BYTES] = decoded
        .try_into()
        .map_err(|_| Error::EncodingError("salt does not decode to 16 bytes".to_string()))?;

    Ok(SaltParts {
        version,
        cost,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salt_format() {
        let salt = generate_salt().unwrap();
        assert_eq!(salt.len(), SALT_TEXT_LEN);
        assert!(salt.starts_with("$2b$10$"));
    }

    #[test]
    fn test_cost_embedded_in_salt() {
        for cost in [MIN_COST, 7, 13, MAX_COST] {
            let salt = generate_salt_with_cost(cost).unwrap();
            assert_eq!(&salt[4..6], format!("{:02}", cost));
        }
    }

    #[test]
    fn test_out_of_range_cost_uses_default() {
        for cost in [0, 1, MIN_COST - 1, MAX_COST + 1, 99, u32::MAX] {
            let salt = generate_salt_with_cost(cost).unwrap();
            assert!(salt.starts_with("$2b$10$"), "cost {} not clamped", cost);
        }
    }

    #[test]
    fn test_salts_are_random() {
        let a = generate_salt().unwrap();
        let b = generate_salt().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_parse_recovers_fields() {
        let salt = generate_salt_with_cost(12).unwrap();
        let parts = parse_salt(&salt).unwrap();
        assert_eq!(parts.cost, 12);
        assert_eq!(BCRYPT_B64.encode(parts.bytes), &salt[7..]);
    }

    #[test]
    fn test_parse_accepts_legacy_version_tags() {
        for tag in ["2a", "2b", "2x", "2y"] {
            let salt = format!("${}$08$N9qo8uLOickgx2ZMRZoMye", tag);
            let parts = parse_salt(&salt).unwrap();
            assert_eq!(parts.cost, 8);
        }
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in [
            "",
            "$2b$10",
            "$2b$10$short",
            "#2b$10$N9qo8uLOickgx2ZMRZoMye",
            "$3a$10$N9qo8uLOickgx2ZMRZoMye",
            "$2z$10$N9qo8uLOickgx2ZMRZoMye",
            "$2b$xx$N9qo8uLOickgx2ZMRZoMye",
            "$2b$10$N9qo8uLOickgx2ZMRZoMy!",
        ] {
            assert!(parse_salt(bad).is_err(), "accepted {:?}", bad);
        }
    }
}
