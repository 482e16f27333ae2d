//! BIDS label restrictions.
//!
//! BIDS entity labels may only contain alphanumeric characters, so
//! everything else (including `_` and `-`, which are BIDS separators) is
//! removed. Alphanumeric means alphabetic or numeric in the Unicode sense,
//! the same set `char::is_alphanumeric` accepts. `\w` is not used because
//! it also admits connector punctuation, joiners and combining marks.

use std::fmt::Display;
use std::sync::LazyLock;

use regex::Regex;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{Alphabetic}\p{N}]+").expect("Invalid label regex"));

/// Strips every non-alphanumeric character from `label`.
pub fn sanitize_label(label: &str) -> String {
    NON_ALPHANUMERIC.replace_all(label, "").into_owned()
}

/// Makes an inferred value safe for use as a BIDS label.
///
/// `None` means the rules found nothing to put into the specification and
/// is passed through; it is not the same as a value that sanitizes to `""`.
/// Non-string values are rendered through [`Display`] first.
pub fn sanitize<T: Display>(value: Option<T>) -> Option<String> {
    value.map(|value| sanitize_label(&value.to_string()))
}
