//! Session client: token slot, CSRF header attachment, authenticated fetch and
//! redirect-based session guarding.
//!
//! Every capability (storage, cookies, transport, navigation, page flag) is
//! injected, so the whole flow runs against in-memory fakes in tests and
//! against `web_sys`/`gloo_net` in the browser (see [`BrowserSession`]).

use contracts::system::auth::{TokenResponse, UserResponse};

use super::cookies::{CookieMatcher, CookieSource, DocumentCookies};
use super::error::AuthError;
use super::navigation::{BodyDataset, Navigator, PageContext, WindowNavigator};
use super::storage::{LocalStorageStore, TokenStore};
use super::transport::{FetchRequest, GlooTransport, HttpResponse, HttpTransport, RequestOptions};
use crate::shared::config::SessionConfig;

/// Client wired to the real browser.
pub type BrowserSession =
    SessionClient<LocalStorageStore, DocumentCookies, GlooTransport, WindowNavigator, BodyDataset>;

/// Result of the load-time guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthCheck {
    /// Page is public, nothing was checked.
    Public,
    Authorized,
    /// Session is not valid; the page was sent to `to`.
    RedirectRequired { to: String },
}

/// Best-effort result of the server-side half of a logout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoteLogout {
    /// No token was stored, so no request was made.
    Skipped,
    Acknowledged,
    Rejected(u16),
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoutOutcome {
    /// Always true once `logout` returns.
    pub local_cleared: bool,
    pub remote: RemoteLogout,
    pub redirect_to: String,
}

pub struct SessionClient<S, C, T, N, P> {
    config: SessionConfig,
    csrf: CookieMatcher,
    store: S,
    cookies: C,
    transport: T,
    navigator: N,
    page: P,
}

impl BrowserSession {
    pub fn browser(config: SessionConfig) -> Self {
        let store = LocalStorageStore::new(config.token_key.clone());
        let transport = GlooTransport::new(config.api_base_url.clone());
        SessionClient::new(
            config,
            store,
            DocumentCookies,
            transport,
            WindowNavigator,
            BodyDataset,
        )
    }
}

impl<S, C, T, N, P> SessionClient<S, C, T, N, P>
where
    S: TokenStore,
    C: CookieSource,
    T: HttpTransport,
    N: Navigator,
    P: PageContext,
{
    pub fn new(
        config: SessionConfig,
        store: S,
        cookies: C,
        transport: T,
        navigator: N,
        page: P,
    ) -> Self {
        let csrf = CookieMatcher::new(&config.csrf_cookie);
        Self {
            config,
            csrf,
            store,
            cookies,
            transport,
            navigator,
            page,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn get_token(&self) -> Option<String> {
        self.store.get()
    }

    pub fn set_token(&self, token: &str) {
        self.store.set(token);
    }

    pub fn remove_token(&self) {
        self.store.remove();
    }

    pub fn is_authenticated(&self) -> bool {
        self.session_token().is_some()
    }

    /// The stored token, with an empty value read as absent.
    fn session_token(&self) -> Option<String> {
        self.get_token().filter(|token| !token.is_empty())
    }

    pub fn get_csrf_token(&self) -> Option<String> {
        self.csrf.find(&self.cookies.cookie_string())
    }

    fn redirect_to_login(&self) -> String {
        let target = self.config.login_route.clone();
        self.navigator.redirect(&target);
        target
    }

    fn attach_csrf(&self, request: &mut FetchRequest) {
        if let Some(csrf) = self.get_csrf_token() {
            request.set_header(&self.config.csrf_header, &csrf);
        }
    }

    /// Clears the local token, tells the server (best effort) and redirects to
    /// the login route. Never fails.
    pub async fn logout(&self) -> LogoutOutcome {
        let token = self.session_token();
        self.remove_token();

        let remote = match token {
            Some(token) => self.remote_logout(&token).await,
            None => RemoteLogout::Skipped,
        };

        LogoutOutcome {
            local_cleared: true,
            remote,
            redirect_to: self.redirect_to_login(),
        }
    }

    async fn remote_logout(&self, token: &str) -> RemoteLogout {
        log::info!("Logging out user");
        let mut request = FetchRequest {
            url: self.config.logout_path.clone(),
            method: Some("POST".to_string()),
            ..Default::default()
        };
        request.set_header("Authorization", &bearer(token));
        self.attach_csrf(&mut request);

        match self.transport.send(request).await {
            Ok(response) if response.ok() => RemoteLogout::Acknowledged,
            Ok(response) => RemoteLogout::Rejected(response.status()),
            Err(e) => {
                log::error!("Logout API call failed: {}", e);
                RemoteLogout::Failed(e.to_string())
            }
        }
    }

    /// Asks the server whether the stored token is still valid.
    ///
    /// Drops the token on any failure; returns false without a request when
    /// no token is stored.
    pub async fn verify_token(&self) -> bool {
        let Some(token) = self.session_token() else {
            return false;
        };

        let mut request = FetchRequest {
            url: self.config.me_path.clone(),
            ..Default::default()
        };
        request.set_header("Authorization", &bearer(&token));

        match self.transport.send(request).await {
            Ok(response) if response.ok() => return true,
            Ok(response) => log::debug!("Token rejected with status {}", response.status()),
            Err(e) => log::error!("Token verification failed: {}", e),
        }

        self.remove_token();
        false
    }

    /// Load-time guard for protected pages.
    pub async fn check_auth(&self) -> AuthCheck {
        if self.page.is_public_page() {
            return AuthCheck::Public;
        }

        if self.verify_token().await {
            AuthCheck::Authorized
        } else {
            AuthCheck::RedirectRequired {
                to: self.redirect_to_login(),
            }
        }
    }

    /// Sends `options` to `url` with the bearer token (and the CSRF token for
    /// state-changing methods).
    ///
    /// Responses other than 401 are returned as-is, error statuses included.
    pub async fn authenticated_fetch(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<T::Response, AuthError> {
        let Some(token) = self.session_token() else {
            return Err(AuthError::Unauthenticated {
                redirect_to: self.redirect_to_login(),
            });
        };

        let RequestOptions {
            method,
            headers,
            body,
        } = options;
        let mut request = FetchRequest {
            url: url.to_string(),
            method,
            headers,
            body,
        };
        request.set_header("Authorization", &bearer(&token));

        if is_state_changing(request.method.as_deref()) {
            self.attach_csrf(&mut request);
        }

        let response = self.transport.send(request).await?;

        if response.status() == 401 {
            self.remove_token();
            return Err(AuthError::Unauthorized {
                redirect_to: self.redirect_to_login(),
            });
        }

        Ok(response)
    }

    /// Exchanges credentials for a token and stores it.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, AuthError> {
        let body = format!(
            "username={}&password={}",
            urlencoding::encode(username),
            urlencoding::encode(password)
        );
        let mut request = FetchRequest {
            url: self.config.login_path.clone(),
            method: Some("POST".to_string()),
            body: Some(body),
            ..Default::default()
        };
        request.set_header("Content-Type", "application/x-www-form-urlencoded");
        self.attach_csrf(&mut request);

        let response = self.transport.send(request).await?;
        let status = response.status();
        if status == 401 {
            log::warn!("Login rejected for {}", username);
            return Err(AuthError::InvalidCredentials);
        }

        let ok = response.ok();
        let text = response.text().await?;
        if !ok {
            return Err(AuthError::http(status, &text));
        }

        let token: TokenResponse = serde_json::from_str(&text)
            .map_err(|e| AuthError::Parse(format!("Failed to decode token: {}", e)))?;
        self.set_token(&token.access_token);
        log::info!("Login: {}", username);
        Ok(token)
    }

    /// Fetches the user behind the stored token.
    pub async fn current_user(&self) -> Result<UserResponse, AuthError> {
        let me_path = self.config.me_path.clone();
        let response = self
            .authenticated_fetch(&me_path, RequestOptions::new().method("GET"))
            .await?;

        let status = response.status();
        let ok = response.ok();
        let text = response.text().await?;
        if !ok {
            return Err(AuthError::http(status, &text));
        }

        serde_json::from_str(&text)
            .map_err(|e| AuthError::Parse(format!("Failed to decode user: {}", e)))
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Anything but GET/HEAD. A missing method counts as state-changing.
fn is_state_changing(method: Option<&str>) -> bool {
    match method {
        Some(method) => !method.eq_ignore_ascii_case("GET") && !method.eq_ignore_ascii_case("HEAD"),
        None => true,
    }
}
