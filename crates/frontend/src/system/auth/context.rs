use std::ops::Deref;
use std::sync::Arc;

use leptos::prelude::*;

use super::client::BrowserSession;
use crate::shared::config::SessionConfig;

/// Shared handle to the browser session client.
#[derive(Clone)]
pub struct Session(Arc<BrowserSession>);

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self(Arc::new(BrowserSession::browser(config)))
    }
}

impl Deref for Session {
    type Target = BrowserSession;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Creates the session client once and provides it to the component tree.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    provide_context(Session::new(SessionConfig::load()));

    children()
}

/// Hook to access the session client
pub fn use_session() -> Session {
    use_context::<Session>().expect("AuthProvider not found in component tree")
}
