//! Session cookie helpers.
//!
//! Builds `Set-Cookie` header values for the session cookie and reads cookie
//! values back out of request headers. The cookie value is the signed JWT.

use axum::http::{header::COOKIE, HeaderMap};
use httpdate::fmt_http_date;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// SameSite attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    /// SameSite=Strict
    Strict,
    /// SameSite=Lax
    Lax,
    /// SameSite=None
    None,
}

impl SameSite {
    fn as_str(self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Options used to build the session cookie.
#[derive(Debug, Clone)]
pub struct CookieOptions {
    /// Cookie name.
    pub name: String,

    /// Cookie path.
    pub path: String,

    /// Optional cookie domain.
    pub domain: Option<String>,

    /// Send on HTTPS only.
    pub secure: bool,

    /// Not accessible to JS.
    pub http_only: bool,

    /// SameSite attribute.
    pub same_site: SameSite,

    /// Max-Age in seconds.
    pub max_age_seconds: Option<u64>,
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            name: "session".to_string(),
            path: "/".to_string(),
            domain: None,
            secure: false,
            http_only: true,
            same_site: SameSite::Lax,
            max_age_seconds: None,
        }
    }
}

fn attributes(opts: &CookieOptions, parts: &mut Vec<String>) {
    parts.push(format!("Path={}", opts.path));

    if let Some(domain) = &opts.domain {
        parts.push(format!("Domain={domain}"));
    }

    if opts.secure {
        parts.push("Secure".to_string());
    }
    if opts.http_only {
        parts.push("HttpOnly".to_string());
    }

    parts.push(format!("SameSite={}", opts.same_site.as_str()));
}

/// Build a `Set-Cookie` header value.
pub fn build_set_cookie(value: &str, opts: &CookieOptions) -> String {
    let mut parts: Vec<String> = Vec::new();
    parts.push(format!("{}={value}", opts.name));
    attributes(opts, &mut parts);

    if let Some(max_age) = opts.max_age_seconds {
        parts.push(format!("Max-Age={max_age}"));
        // Expires for older clients.
        let expires = SystemTime::now() + Duration::from_secs(max_age);
        parts.push(format!("Expires={}", fmt_http_date(expires)));
    }

    parts.join("; ")
}

/// Build a `Set-Cookie` header value that clears the cookie.
pub fn build_clear_cookie(opts: &CookieOptions) -> String {
    let mut parts: Vec<String> = Vec::new();
    parts.push(format!("{}=", opts.name));
    attributes(opts, &mut parts);
    parts.push("Max-Age=0".to_string());
    parts.push(format!("Expires={}", fmt_http_date(UNIX_EPOCH)));

    parts.join("; ")
}

/// Read a cookie value from request headers.
///
/// Scans every `Cookie` header for `name=value` pairs; returns the first
/// match. Values are returned verbatim (no decoding — the session cookie
/// holds a JWT, which is cookie-safe).
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    for header in headers.get_all(COOKIE) {
        let Ok(raw) = header.to_str() else { continue };
        for pair in raw.split(';') {
            if let Some((k, v)) = pair.trim().split_once('=') {
                if k == name {
                    return Some(v.to_string());
                }
            }
        }
    }
    None
}
