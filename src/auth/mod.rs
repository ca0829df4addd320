//
//  testrail-cli
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! TestRail authenticates every API request with HTTP Basic authentication.
//! The secret half of the credential is either the account password or an
//! API key generated under *My Settings → API Keys*; the server accepts both
//! in the same header.
//!
//! There is no session or token exchange: the header is computed once per
//! client and attached to each request.
//!
//! ## Example
//!
//! ```rust
//! use testrail_cli::auth::AuthCredential;
//!
//! let credential = AuthCredential::api_key("qa@example.com", "c2VjcmV0");
//! assert_eq!(credential.username(), "qa@example.com");
//! assert!(credential.header_value().starts_with("Basic "));
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Credentials used to authenticate against a TestRail instance.
///
/// # Variants
///
/// - `Basic`: username and account password
/// - `ApiKey`: username and API key. Preferred, since keys can be revoked
///   individually.
///
/// Both variants produce the same `Authorization: Basic ...` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthCredential {
    /// Username and password.
    Basic {
        /// The TestRail login, usually an email address.
        username: String,
        /// The account password.
        password: String,
    },
    /// Username and API key.
    ApiKey {
        /// The TestRail login, usually an email address.
        username: String,
        /// The API key.
        key: String,
    },
}

impl AuthCredential {
    /// Creates a password credential.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Creates an API key credential.
    pub fn api_key(username: impl Into<String>, key: impl Into<String>) -> Self {
        Self::ApiKey {
            username: username.into(),
            key: key.into(),
        }
    }

    /// The login name.
    pub fn username(&self) -> &str {
        match self {
            Self::Basic { username, .. } | Self::ApiKey { username, .. } => username,
        }
    }

    fn secret(&self) -> &str {
        match self {
            Self::Basic { password, .. } => password,
            Self::ApiKey { key, .. } => key,
        }
    }

    /// Computes the value of the `Authorization` header.
    ///
    /// # Returns
    ///
    /// `Basic ` followed by the standard base64 encoding of `username:secret`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use testrail_cli::auth::AuthCredential;
    ///
    /// let credential = AuthCredential::basic("Aladdin", "open sesame");
    /// assert_eq!(credential.header_value(), "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==");
    /// ```
    pub fn header_value(&self) -> String {
        let raw = format!("{}:{}", self.username(), self.secret());
        format!("Basic {}", STANDARD.encode(raw.as_bytes()))
    }

    /// Short label for display (`password` or `api key`).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Basic { .. } => "password",
            Self::ApiKey { .. } => "api key",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_header() {
        let credential = AuthCredential::basic("Aladdin", "open sesame");
        assert_eq!(credential.header_value(), "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==");
        assert_eq!(credential.kind(), "password");
    }

    #[test]
    fn test_api_key_header_matches_password_shape() {
        let with_key = AuthCredential::api_key("qa@example.com", "k3y");
        let with_password = AuthCredential::basic("qa@example.com", "k3y");
        assert_eq!(with_key.header_value(), with_password.header_value());
        assert_eq!(with_key.username(), "qa@example.com");
        assert_eq!(with_key.kind(), "api key");
    }

    #[test]
    fn test_header_decodes_to_user_and_secret() {
        let header = AuthCredential::basic("user@example.com", "p:ss").header_value();
        let encoded = header.strip_prefix("Basic ").unwrap();
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), "user@example.com:p:ss");
    }
}
