//! Session configuration with build-time overrides.
//!
//! Defaults match the server's routes. `ADHOC_API_BASE_URL` and
//! `ADHOC_LOGIN_ROUTE` may be set at build time; values here are public, do not
//! put secrets in them.

use contracts::system::auth::{
    ACCESS_TOKEN_KEY, CSRF_COOKIE_NAME, CSRF_HEADER_NAME, DASHBOARD_ROUTE, LOGIN_PATH,
    LOGIN_ROUTE, LOGOUT_PATH, ME_PATH,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Prefix for relative request URLs. Empty means same origin.
    pub api_base_url: String,
    pub login_route: String,
    pub landing_route: String,
    pub token_key: String,
    pub csrf_cookie: String,
    pub csrf_header: String,
    pub login_path: String,
    pub logout_path: String,
    pub me_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            login_route: LOGIN_ROUTE.to_string(),
            landing_route: DASHBOARD_ROUTE.to_string(),
            token_key: ACCESS_TOKEN_KEY.to_string(),
            csrf_cookie: CSRF_COOKIE_NAME.to_string(),
            csrf_header: CSRF_HEADER_NAME.to_string(),
            login_path: LOGIN_PATH.to_string(),
            logout_path: LOGOUT_PATH.to_string(),
            me_path: ME_PATH.to_string(),
        }
    }
}

impl SessionConfig {
    /// Defaults with build-time environment overrides applied.
    pub fn load() -> Self {
        let mut config = Self::default();
        apply_overrides(
            &mut config,
            option_env!("ADHOC_API_BASE_URL"),
            option_env!("ADHOC_LOGIN_ROUTE"),
        );
        config
    }
}

fn apply_overrides(config: &mut SessionConfig, api_base_url: Option<&str>, login_route: Option<&str>) {
    if let Some(value) = api_base_url.map(str::trim).filter(|v| !v.is_empty()) {
        config.api_base_url = value.to_string();
    }
    if let Some(value) = login_route.map(str::trim).filter(|v| !v.is_empty()) {
        config.login_route = value.to_string();
    }
}
