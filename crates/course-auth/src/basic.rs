//! HTTP Basic credential parsing

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::fmt;

/// Identifier/secret pair decoded from a `Basic` authorization value
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    /// Email address of the account
    pub identifier: String,
    pub secret: String,
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Parse an `Authorization` header value using the `Basic` scheme
///
/// Returns `None` for a missing header, any other scheme, undecodable
/// base64, non UTF-8 content or a payload without a colon. Callers are not
/// told which.
pub fn parse_basic_credentials(header: Option<&str>) -> Option<BasicCredentials> {
    let (scheme, token) = header?.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let token = token.trim_start();
    if token.is_empty() || token.contains(char::is_whitespace) {
        return None;
    }

    let decoded = STANDARD.decode(token).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;

    // Only the first colon separates; secrets may contain colons
    let (identifier, secret) = decoded.split_once(':')?;

    Some(BasicCredentials {
        identifier: identifier.to_string(),
        secret: secret.to_string(),
    })
}
