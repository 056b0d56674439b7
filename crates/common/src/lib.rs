//! Common utility functions for utilkit.
//!
//! Four independent helpers that share nothing but an error type:
//!
//! - [`delay`] - async sleep that always yields to the scheduler
//! - [`datetime`] - fixed-locale date formatting and date text parsing
//! - [`json`] - parse-or-fallback JSON decoding
//! - [`random`] - alphanumeric random strings
//!
//! # Design Principles
//!
//! - **Independent entry points** - no function depends on another's state
//! - **No global state** - nothing is cached or configured at runtime
//! - **Fixed output format** - the date locale and random alphabet are baked in
//! - **Errors for contract violations only** - malformed JSON is absorbed, a
//!   negative length or an unreadable date is reported

pub mod datetime;
pub mod delay;
pub mod error;
pub mod json;
pub mod random;


// Re-export commonly used functions at crate root for convenience
pub use datetime::{format_date, format_naive_date, parse_date, DateInput};
pub use delay::{sleep, sleep_checked};
pub use error::UtilError;
pub use json::{parse_json_or, parse_json_or_default, parse_json_or_else, parse_json_or_ref};
pub use random::{random_string, random_string_checked, random_string_with, ALPHANUMERIC};
