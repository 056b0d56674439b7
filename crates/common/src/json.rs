//! Parse-or-fallback JSON decoding.
//!
//! Call sites that would otherwise write
//! `serde_json::from_str(s).unwrap_or(fallback)` get one place that also logs
//! why the fallback was taken. Decode errors never reach the caller and no
//! partial result is kept: one bad token discards the whole parse.

use std::borrow::Cow;

use serde::de::DeserializeOwned;

/// Decodes `text` as JSON, returning `fallback` if decoding fails.
///
/// On failure the caller's own `fallback` value is moved back out unchanged,
/// never a rebuilt copy. Decode as `serde_json::Value` to preserve arbitrary
/// fields and nesting with no schema; a typed `T` is checked only by its
/// `Deserialize` impl.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use utilkit_common::parse_json_or;
///
/// let parsed = parse_json_or(r#"{"name": "test"}"#, json!({ "name": "" }));
/// assert_eq!(parsed, json!({ "name": "test" }));
///
/// let fallback = json!({ "error": true });
/// assert_eq!(parse_json_or("invalid", fallback.clone()), fallback);
/// ```
pub fn parse_json_or<T: DeserializeOwned>(text: &str, fallback: T) -> T {
    parse_json_or_else(text, || fallback)
}

/// Like [`parse_json_or`], but the fallback is only built when needed.
pub fn parse_json_or_else<T, F>(text: &str, fallback: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            log_fallback(text, &e);
            fallback()
        }
    }
}

/// Like [`parse_json_or`], falling back to `T::default()`.
pub fn parse_json_or_default<T: DeserializeOwned + Default>(text: &str) -> T {
    parse_json_or_else(text, T::default)
}

/// Decodes `text` as JSON, returning the exact `fallback` reference on failure.
///
/// `Cow::Borrowed` always holds the caller's reference (so `std::ptr::eq`
/// identifies the fallback path); a successful decode is `Cow::Owned`.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use serde_json::{json, Value};
/// use utilkit_common::parse_json_or_ref;
///
/// let fallback = json!({ "error": true });
/// let result: Cow<'_, Value> = parse_json_or_ref("invalid", &fallback);
/// assert!(matches!(result, Cow::Borrowed(r) if std::ptr::eq(r, &fallback)));
/// ```
pub fn parse_json_or_ref<'a, T>(text: &str, fallback: &'a T) -> Cow<'a, T>
where
    T: ToOwned + ?Sized,
    T::Owned: DeserializeOwned,
{
    match serde_json::from_str::<T::Owned>(text) {
        Ok(value) => Cow::Owned(value),
        Err(e) => {
            log_fallback(text, &e);
            Cow::Borrowed(fallback)
        }
    }
}

fn log_fallback(text: &str, error: &serde_json::Error) {
    tracing::debug!(
        error = %error,
        input_len = text.len(),
        "JSON decode failed, using fallback"
    );
}
