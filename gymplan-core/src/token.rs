//! Share tokens: a whole plan packed into a URL fragment.
//!
//! Format: `plan=<percent-escaped standard base64 of the plan's compact JSON>`,
//! meant to follow the `#` of a link. Encoding works on UTF-8 bytes, so any
//! text in names and notes survives the trip.
//!
//! The codec has no size limit of its own. Links are the limit in practice:
//! many browsers, chat apps and URL shorteners cut URLs somewhere between
//! 2,000 and 8,000 characters, and each workout costs a few hundred token
//! characters.

use std::borrow::Cow;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use url::Url;

use crate::error::{DecodeError, PlanResult};
use crate::plan::Plan;

/// Marker that starts every share token.
pub const TOKEN_PREFIX: &str = "plan=";

/// Encode a plan into a share token (without the leading `#`).
pub fn encode(plan: &Plan) -> PlanResult<String> {
    let json = serde_json::to_string(plan)?;
    let b64 = STANDARD.encode(json.as_bytes());
    let token = format!("{}{}", TOKEN_PREFIX, urlencoding::encode(&b64));

    tracing::debug!(
        "Encoded {} workouts into a {}-character share token",
        plan.len(),
        token.len()
    );
    Ok(token)
}

/// Decode a share token, with or without its leading `#`.
///
/// Returns `Ok(None)` when the input is not a plan token at all, and an error
/// when it claims to be one but cannot be read. Decoding is all-or-nothing.
pub fn decode(token: &str) -> Result<Option<Plan>, DecodeError> {
    let fragment = token.strip_prefix('#').unwrap_or(token);
    let Some(payload) = fragment.strip_prefix(TOKEN_PREFIX) else {
        return Ok(None);
    };

    let b64 = percent_decode(payload)?;
    let bytes = STANDARD
        .decode(b64.as_bytes())
        .map_err(|e| DecodeError::Base64(e.to_string()))?;
    let json = String::from_utf8(bytes).map_err(|_| DecodeError::Utf8)?;
    let plan = Plan::from_json(&json)?;

    tracing::debug!("Decoded {} workouts from share token", plan.len());
    Ok(Some(plan))
}

/// A link to `base` that opens `plan`. Any existing fragment is replaced.
pub fn share_url(base: &Url, plan: &Plan) -> PlanResult<Url> {
    let mut url = base.clone();
    url.set_fragment(Some(&encode(plan)?));
    Ok(url)
}

/// The token part of a pasted link, or the input itself when it is not a URL.
pub fn fragment_of(input: &str) -> Cow<'_, str> {
    match Url::parse(input.trim()) {
        Ok(url) => Cow::Owned(url.fragment().unwrap_or_default().to_string()),
        Err(_) => Cow::Borrowed(input.trim()),
    }
}

/// Percent-decode, rejecting any `%` that is not followed by two hex digits.
fn percent_decode(input: &str) -> Result<Cow<'_, str>, DecodeError> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return Err(DecodeError::Percent(format!("bad escape at offset {}", i)));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    urlencoding::decode(input).map_err(|e| DecodeError::Percent(e.to_string()))
}
