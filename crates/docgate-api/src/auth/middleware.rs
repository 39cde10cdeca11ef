//! Admin allowlist gate.
//!
//! A capability check performed before any policy code runs: requests must
//! carry a bearer token from the configured allowlist. The policy components
//! themselves never inspect identity.

use crate::error::HttpAppError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use docgate_core::{AppError, Config};
use std::sync::Arc;
use subtle::ConstantTimeEq;

#[derive(Clone)]
pub struct AuthState {
    pub admin_tokens: Vec<String>,
    pub disabled: bool,
}

impl AuthState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            admin_tokens: config.admin_tokens.clone(),
            disabled: config.auth_disabled,
        }
    }

    fn is_admin_token(&self, candidate: &str) -> bool {
        // Compare against every configured token so timing does not reveal
        // which entry matched.
        let mut authorized = false;
        for token in &self.admin_tokens {
            if secure_compare(token, candidate) {
                authorized = true;
            }
        }
        authorized
    }
}

fn secure_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

pub async fn auth_middleware(
    State(auth_state): State<Arc<AuthState>>,
    request: Request,
    next: Next,
) -> Response {
    if auth_state.disabled {
        return next.run(request).await;
    }

    let bearer: Option<String> = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_string);

    match bearer.as_deref() {
        Some(token) if auth_state.is_admin_token(token) => next.run(request).await,
        Some(_) => {
            tracing::warn!(path = %request.uri().path(), "Rejected unknown bearer token");
            HttpAppError(AppError::Unauthorized(
                "Invalid bearer token".to_string(),
            ))
            .into_response()
        }
        None => {
            tracing::debug!(path = %request.uri().path(), "Missing authorization header");
            HttpAppError(AppError::Unauthorized(
                "Missing or malformed Authorization header".to_string(),
            ))
            .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth_state(tokens: &[&str]) -> AuthState {
        AuthState {
            admin_tokens: tokens.iter().map(|t| t.to_string()).collect(),
            disabled: false,
        }
    }

    #[test]
    fn secure_compare_requires_exact_match() {
        assert!(secure_compare("abc", "abc"));
        assert!(!secure_compare("abc", "abd"));
        assert!(!secure_compare("abc", "abcd"));
        assert!(!secure_compare("", "a"));
    }

    #[test]
    fn any_allowlisted_token_is_accepted() {
        let state = auth_state(&["alpha", "beta"]);
        assert!(state.is_admin_token("alpha"));
        assert!(state.is_admin_token("beta"));
        assert!(!state.is_admin_token("gamma"));
    }

    #[test]
    fn empty_allowlist_rejects_everything() {
        let state = auth_state(&[]);
        assert!(!state.is_admin_token(""));
        assert!(!state.is_admin_token("anything"));
    }
}
