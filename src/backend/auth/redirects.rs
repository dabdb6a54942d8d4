//! Redirect-target sanitization.
//!
//! The `next` query parameter on login and logout is attacker-controlled
//! input. Honoring it unchecked would make both endpoints open redirectors,
//! so every requested destination is validated against a strict allow-list
//! and coerced to a safe fallback on any violation.

use crate::backend::server::config::AuthConfig;

/// Check that a requested `next` destination is a same-origin relative path.
///
/// Accepted: paths starting with a single `/`, free of scheme separators and
/// control characters. `//host` and `/\host` are rejected — browsers treat
/// both as protocol-relative URLs.
fn is_safe_relative_path(next: &str, allowed_prefixes: &[String]) -> bool {
    if !next.starts_with('/') {
        return false;
    }
    if next.starts_with("//") || next.starts_with("/\\") {
        return false;
    }
    if next.contains("://") || next.chars().any(|c| c.is_control()) {
        return false;
    }
    if !allowed_prefixes.is_empty() && !allowed_prefixes.iter().any(|p| next.starts_with(p)) {
        return false;
    }
    true
}

/// Sanitize the post-login destination.
pub fn allowed_login_next(next: Option<&str>, config: &AuthConfig) -> String {
    match next {
        Some(n) if is_safe_relative_path(n, &config.allowed_next_prefixes) => n.to_string(),
        Some(n) => {
            tracing::warn!("rejected login next target: {}", n);
            config.login_fallback.clone()
        }
        None => config.login_fallback.clone(),
    }
}

/// Sanitize the post-logout destination.
pub fn allowed_logout_next(next: Option<&str>, config: &AuthConfig) -> String {
    match next {
        Some(n) if is_safe_relative_path(n, &config.allowed_next_prefixes) => n.to_string(),
        Some(n) => {
            tracing::warn!("rejected logout next target: {}", n);
            config.logout_fallback.clone()
        }
        None => config.logout_fallback.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AuthConfig {
        AuthConfig::from_env()
    }

    #[test]
    fn accepts_relative_paths() {
        let c = config();
        assert_eq!(allowed_login_next(Some("/dashboard"), &c), "/dashboard");
        assert_eq!(allowed_logout_next(Some("/"), &c), "/");
    }

    #[test]
    fn rejects_absolute_urls() {
        let c = config();
        assert_eq!(allowed_login_next(Some("https://evil.example"), &c), "/");
        assert_eq!(allowed_logout_next(Some("https://evil.example"), &c), "/");
    }

    #[test]
    fn rejects_protocol_relative_urls() {
        let c = config();
        assert_eq!(allowed_login_next(Some("//evil.example"), &c), "/");
        assert_eq!(allowed_login_next(Some("/\\evil.example"), &c), "/");
    }

    #[test]
    fn missing_next_falls_back() {
        let c = config();
        assert_eq!(allowed_login_next(None, &c), "/");
    }

    #[test]
    fn prefix_allow_list_narrows_targets() {
        let mut c = config();
        c.allowed_next_prefixes = vec!["/app".to_string()];
        assert_eq!(allowed_login_next(Some("/app/home"), &c), "/app/home");
        assert_eq!(allowed_login_next(Some("/elsewhere"), &c), "/");
    }
}
