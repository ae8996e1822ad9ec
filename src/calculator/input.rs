//! Filtering raw text down to what the calculator accepts as input.
//!
//! Typed and pasted text is restricted to the writable set: digits, `.`,
//! the operators and brackets. Everything else is dropped before it ever
//! reaches the evaluator.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches any character outside the writable set.
    static ref NON_WRITABLE: Regex = Regex::new(r"[^0-9.^*/+\-()]").unwrap();
}

/// Drop every character outside the writable set, e.g. from pasted text.
pub fn sanitize(text: &str) -> String {
    NON_WRITABLE.replace_all(text, "").into_owned()
}
