//! Fetch-style request primitive.
//!
//! `FetchRequest` is the transient value the session client builds per call;
//! `HttpTransport` sends it. The browser implementation wraps `gloo_net::http`.

use async_trait::async_trait;
use gloo_net::http::{Method, RequestBuilder};

use super::error::TransportError;
use crate::shared::api_utils::build_url;

/// Caller-side request options for [`authenticated_fetch`].
///
/// `method: None` leaves the method to the transport default (GET).
///
/// [`authenticated_fetch`]: super::client::SessionClient::authenticated_fetch
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: Option<String>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: &str) -> Self {
        self.method = Some(method.to_string());
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn json<T: serde::Serialize>(self, value: &T) -> Result<Self, serde_json::Error> {
        let payload = serde_json::to_string(value)?;
        Ok(self.header("Content-Type", "application/json").body(payload))
    }
}

/// A fully assembled outbound request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    pub method: Option<String>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl FetchRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Sets a header, replacing any existing value under the same name.
    pub fn set_header(&mut self, name: &str, value: &str) {
        self.headers.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.to_string()));
    }
}

#[async_trait(?Send)]
pub trait HttpResponse {
    fn status(&self) -> u16;

    fn ok(&self) -> bool {
        (200..300).contains(&self.status())
    }

    async fn text(self) -> Result<String, TransportError>;
}

#[async_trait(?Send)]
pub trait HttpTransport {
    type Response: HttpResponse;

    async fn send(&self, request: FetchRequest) -> Result<Self::Response, TransportError>;
}

/// Browser transport over `gloo_net`. Relative URLs are joined to `base_url`.
#[derive(Clone, Debug, Default)]
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

fn parse_method(method: Option<&str>) -> Result<Method, TransportError> {
    let method = method.unwrap_or("GET").to_ascii_uppercase();
    match method.as_str() {
        "GET" => Ok(Method::GET),
        "HEAD" => Ok(Method::HEAD),
        "POST" => Ok(Method::POST),
        "PUT" => Ok(Method::PUT),
        "PATCH" => Ok(Method::PATCH),
        "DELETE" => Ok(Method::DELETE),
        "OPTIONS" => Ok(Method::OPTIONS),
        other => Err(TransportError::new(format!("Unsupported method: {}", other))),
    }
}

#[async_trait(?Send)]
impl HttpResponse for gloo_net::http::Response {
    fn status(&self) -> u16 {
        gloo_net::http::Response::status(self)
    }

    async fn text(self) -> Result<String, TransportError> {
        gloo_net::http::Response::text(&self)
            .await
            .map_err(|e| TransportError::new(format!("Failed to read response: {}", e)))
    }
}

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    type Response = gloo_net::http::Response;

    async fn send(&self, request: FetchRequest) -> Result<Self::Response, TransportError> {
        let url = build_url(&self.base_url, &request.url);
        let mut builder = RequestBuilder::new(&url).method(parse_method(request.method.as_deref())?);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let built = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError::new(format!("Failed to build request: {}", e)))?;

        built
            .send()
            .await
            .map_err(|e| TransportError::new(format!("Failed to send request: {}", e)))
    }
}
