//! Random alphanumeric strings.
//!
//! Not for secrets: the thread-local generator is fast, not a
//! security boundary. Use a CSPRNG-backed token generator for anything that
//! must be unguessable.

use rand::Rng;

use crate::error::{non_negative, within_usize, UtilError};

/// The 62 characters every generated string is drawn from.
pub const ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

const CHARSET: &[u8] = ALPHANUMERIC.as_bytes();

/// Generates a string of exactly `len` characters from [`ALPHANUMERIC`].
///
/// Each character is drawn independently and uniformly. `len == 0` yields an
/// empty string.
///
/// # Examples
///
/// ```
/// use utilkit_common::random_string;
///
/// assert_eq!(random_string(10).len(), 10);
/// assert_eq!(random_string(0), "");
/// ```
pub fn random_string(len: usize) -> String {
    random_string_with(&mut rand::thread_rng(), len)
}

/// [`random_string`] with a caller-supplied generator.
pub fn random_string_with<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(CHARSET[rng.gen_range(0..CHARSET.len())]))
        .collect()
}

/// [`random_string`] for callers holding a signed length.
///
/// # Errors
///
/// Returns [`UtilError::NegativeInput`] for a negative `len`, and
/// [`UtilError::TooLarge`] if `len` exceeds `usize::MAX`.
pub fn random_string_checked(len: i64) -> Result<String, UtilError> {
    let len = within_usize("length", non_negative("length", len)?)?;
    Ok(random_string(len))
}
