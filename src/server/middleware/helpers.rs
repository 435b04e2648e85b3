//! Helper functions for request authentication

use crate::auth::AuthMethod;
use actix_web::http::header::{AUTHORIZATION, HeaderMap};

/// Extract the authentication method from request headers
///
/// Only `Authorization: Bearer <token>` is recognised; the scheme name is
/// matched case-insensitively.
pub fn extract_auth_method(headers: &HeaderMap) -> AuthMethod {
    let Some(value) = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) else {
        return AuthMethod::None;
    };

    match value.trim().split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => {
            let token = token.trim();
            if token.is_empty() {
                AuthMethod::None
            } else {
                AuthMethod::Bearer(token.to_string())
            }
        }
        _ => AuthMethod::None,
    }
}
