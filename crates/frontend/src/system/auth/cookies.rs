use regex::Regex;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Read access to the ambient cookie string (`document.cookie`).
pub trait CookieSource {
    fn cookie_string(&self) -> String;
}

/// Cookies of the current document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookies;

impl CookieSource for DocumentCookies {
    fn cookie_string(&self) -> String {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
            .and_then(|d| d.cookie().ok())
            .unwrap_or_default()
    }
}

/// Fixed cookie string.
#[derive(Clone, Debug, Default)]
pub struct StaticCookies(pub String);

impl StaticCookies {
    pub fn new(cookies: impl Into<String>) -> Self {
        Self(cookies.into())
    }
}

impl CookieSource for StaticCookies {
    fn cookie_string(&self) -> String {
        self.0.clone()
    }
}

/// Matches `<name>=([^;]+)` anywhere in a cookie string.
#[derive(Clone, Debug)]
pub struct CookieMatcher {
    pattern: Regex,
}

impl CookieMatcher {
    pub fn new(name: &str) -> Self {
        let pattern = Regex::new(&format!("{}=([^;]+)", regex::escape(name)))
            .expect("escaped cookie name is a valid pattern");
        Self { pattern }
    }

    /// First captured value, if the cookie is present.
    pub fn find(&self, cookies: &str) -> Option<String> {
        self.pattern
            .captures(cookies)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_csrf_between_other_cookies() {
        let matcher = CookieMatcher::new("csrf_token");
        assert_eq!(matcher.find("a=1; csrf_token=XYZ; b=2").as_deref(), Some("XYZ"));
        assert_eq!(matcher.find("csrf_token=last").as_deref(), Some("last"));
    }

    #[test]
    fn test_missing_cookie() {
        let matcher = CookieMatcher::new("csrf_token");
        assert_eq!(matcher.find("a=1; b=2"), None);
        assert_eq!(matcher.find(""), None);
        assert_eq!(matcher.find("csrf_token="), None);
    }

    #[test]
    fn test_first_match_wins() {
        let matcher = CookieMatcher::new("csrf_token");
        assert_eq!(matcher.find("csrf_token=one; csrf_token=two").as_deref(), Some("one"));
    }

    #[test]
    fn test_name_is_escaped() {
        let matcher = CookieMatcher::new("a.b");
        assert_eq!(matcher.find("axb=1"), None);
        assert_eq!(matcher.find("a.b=1").as_deref(), Some("1"));
    }
}
