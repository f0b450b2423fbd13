//! HTTP Basic authentication
//!
//! The service authenticates every call with `Authorization: Basic <token>`
//! where the token is the base64 of `account_id:access_token`.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::header::HeaderValue;
use saucerest_domain::{Credentials, SauceRestError};

/// Base64 of the UTF-8 bytes of `account_id:access_token`.
pub fn encode_basic_token(credentials: &Credentials) -> String {
    BASE64.encode(credentials.basic_pair().as_bytes())
}

/// Ready-to-send `Authorization` header value, marked sensitive so it is
/// never printed by reqwest's debug output.
pub fn basic_auth_header(credentials: &Credentials) -> Result<HeaderValue, SauceRestError> {
    let mut value = HeaderValue::from_str(&format!("Basic {}", encode_basic_token(credentials)))
        .map_err(|e| SauceRestError::Config(format!("Invalid authorization header: {e}")))?;
    value.set_sensitive(true);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_user_and_key() {
        let creds = Credentials::new("user", "key");
        assert_eq!(encode_basic_token(&creds), "dXNlcjprZXk=");
    }

    #[test]
    fn token_decodes_back_to_pair() {
        let creds = Credentials::new("sauce-user", "0f9e-8d7c");
        let decoded = BASE64.decode(encode_basic_token(&creds)).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), "sauce-user:0f9e-8d7c");
    }

    #[test]
    fn non_ascii_credentials_use_utf8_bytes() {
        let creds = Credentials::new("jürgen", "ключ");
        let decoded = BASE64.decode(encode_basic_token(&creds)).unwrap();
        assert_eq!(decoded, "jürgen:ключ".as_bytes());
    }

    #[test]
    fn header_is_sensitive() {
        let header = basic_auth_header(&Credentials::new("user", "key")).unwrap();
        assert!(header.is_sensitive());
        assert_eq!(header.to_str().unwrap(), "Basic dXNlcjprZXk=");
    }
}
