//! Session cookie parsing and `Set-Cookie` values

/// Find a cookie value in a `Cookie` header
///
/// # Examples
///
/// ```
/// use blogo::server::cookies::parse_cookie;
///
/// assert_eq!(parse_cookie("a=1; adminToken=xyz", "adminToken").as_deref(), Some("xyz"));
/// assert_eq!(parse_cookie("a=1", "adminToken"), None);
/// ```
#[must_use]
pub fn parse_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}

/// `Set-Cookie` value that stores a session token
#[must_use]
pub fn session_cookie(name: &str, token: &str, max_age_secs: i64, secure: bool) -> String {
    let mut cookie =
        format!("{name}={token}; HttpOnly; Path=/; Max-Age={max_age_secs}; SameSite=Lax");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value that expires the session cookie
#[must_use]
pub fn clear_cookie(name: &str, secure: bool) -> String {
    session_cookie(name, "", 0, secure)
}
