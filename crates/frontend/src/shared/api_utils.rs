//! URL helpers for frontend-backend communication.

/// Joins a base URL and a path.
///
/// Absolute URLs (`http://`, `https://`) are returned untouched; an empty base
/// keeps the path relative to the current origin.
///
/// # Example
/// ```rust
/// use adhoc_frontend::shared::api_utils::build_url;
/// assert_eq!(build_url("http://host:8000/", "/api/auth/me"), "http://host:8000/api/auth/me");
/// ```
pub fn build_url(base_url: &str, path: &str) -> String {
    let path = path.trim();
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }

    let base = base_url.trim().trim_end_matches('/');
    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        assert_eq!(build_url("", "/api/auth/me"), "/api/auth/me");
        assert_eq!(build_url("https://example.com", "api/items"), "https://example.com/api/items");
        assert_eq!(
            build_url("https://example.com", "https://other.org/x"),
            "https://other.org/x"
        );
    }
}
