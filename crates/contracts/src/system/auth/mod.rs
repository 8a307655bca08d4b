use serde::{Deserialize, Serialize};

/// Browser storage key holding the bearer token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Cookie the server issues for double-submit CSRF protection.
pub const CSRF_COOKIE_NAME: &str = "csrf_token";
pub const CSRF_HEADER_NAME: &str = "X-CSRF-Token";

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const LOGOUT_PATH: &str = "/api/auth/logout";
pub const ME_PATH: &str = "/api/auth/me";

pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Body of `GET /api/auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_shape() {
        let token: TokenResponse =
            serde_json::from_str(r#"{"access_token":"abc","token_type":"bearer"}"#).unwrap();
        assert_eq!(token.access_token, "abc");
        assert_eq!(token.token_type, "bearer");
    }

    #[test]
    fn test_user_response_ignores_extra_fields() {
        let user: UserResponse = serde_json::from_str(
            r#"{"id":7,"username":"admin","is_active":true,"created_at":"2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(
            user,
            UserResponse {
                id: 7,
                username: "admin".to_string(),
                is_active: true
            }
        );
    }
}
