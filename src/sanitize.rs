//! Raw search payload repair
//!
//! Search responses occasionally interleave a spurious bare integer token
//! between record objects, like `...},34545,{...` or a trailing `},34545`.
//! Two substitutions, applied in this fixed order, strip the token before
//! the payload reaches the deserializer. This is a best-effort textual
//! repair for that one malformation shape, not a structural guarantee.

use once_cell::sync::Lazy;
use regex::Regex;

static BAD_TOKEN_AFTER_OBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\},([0-9]+)(,\{)?").expect("valid token-after-object pattern"));
static BAD_TOKEN_BEFORE_OBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+),\{").expect("valid token-before-object pattern"));

/// Remove malformed bare integer tokens from a raw payload.
///
/// Total function: clean text passes through unchanged, so the repair is
/// idempotent.
pub fn sanitize_payload(data: &str) -> String {
    let repaired = BAD_TOKEN_AFTER_OBJECT.replace_all(data, "}$2");
    BAD_TOKEN_BEFORE_OBJECT.replace_all(&repaired, "{").into_owned()
}
