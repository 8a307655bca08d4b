use thiserror::Error;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Failure raised by the request primitive itself (no response received).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors surfaced by authenticated operations.
///
/// `Unauthenticated` and `Unauthorized` are raised after the session has been
/// cleared and the page sent to `redirect_to`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("No authentication token")]
    Unauthenticated { redirect_to: String },

    #[error("Unauthorized")]
    Unauthorized { redirect_to: String },

    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("Network error: {0}")]
    Transport(#[from] TransportError),

    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },

    #[error("Response error: {0}")]
    Parse(String),
}

impl AuthError {
    /// Where the page was sent, if this error came with a redirect.
    pub fn redirect_to(&self) -> Option<&str> {
        match self {
            AuthError::Unauthenticated { redirect_to } | AuthError::Unauthorized { redirect_to } => {
                Some(redirect_to)
            }
            _ => None,
        }
    }

    /// Builds an `Http` error from a status and raw body, trimming and truncating the body.
    pub fn http(status: u16, body: &str) -> Self {
        let trimmed = body.trim();
        let message = if trimmed.is_empty() {
            "Request failed.".to_string()
        } else {
            trimmed.chars().take(MAX_ERROR_CHARS).collect()
        };
        AuthError::Http { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_body_is_sanitized() {
        assert_eq!(
            AuthError::http(500, "   "),
            AuthError::Http {
                status: 500,
                message: "Request failed.".to_string()
            }
        );

        let long = "x".repeat(500);
        match AuthError::http(502, &format!("  {}  ", long)) {
            AuthError::Http { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message.len(), MAX_ERROR_CHARS);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_redirect_target() {
        let err = AuthError::Unauthorized {
            redirect_to: "/login".to_string(),
        };
        assert_eq!(err.redirect_to(), Some("/login"));
        assert_eq!(err.to_string(), "Unauthorized");
        assert_eq!(AuthError::InvalidCredentials.redirect_to(), None);
    }

    #[test]
    fn test_transport_converts() {
        let err: AuthError = TransportError::new("connection refused").into();
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}
