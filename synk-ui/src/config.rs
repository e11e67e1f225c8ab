//! UI configuration
//!
//! The auth base URL defaults to the host's same-origin relay and can be
//! pointed elsewhere with `localStorage.setItem("synk_auth_url", ...)`.

/// Same-origin path the host forwards to the auth service
pub const DEFAULT_AUTH_BASE: &str = "/api/auth";

/// localStorage key overriding [`DEFAULT_AUTH_BASE`]
pub const AUTH_URL_STORAGE_KEY: &str = "synk_auth_url";

/// Where the auth service sends the browser after a completed sign-in
pub const CALLBACK_URL: &str = "/";

/// Auth base URL from localStorage, else the default
pub fn auth_base_url() -> String {
    stored_auth_url()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_AUTH_BASE.to_string())
}

fn stored_auth_url() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(AUTH_URL_STORAGE_KEY).ok()?
}

/// Trim whitespace and trailing slashes
pub fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("/api/auth/"), "/api/auth");
        assert_eq!(normalize_base(" http://localhost:3001/api/auth// "), "http://localhost:3001/api/auth");
        assert_eq!(normalize_base(DEFAULT_AUTH_BASE), DEFAULT_AUTH_BASE);
    }
}
