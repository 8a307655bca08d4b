use leptos::prelude::*;
use leptos::task::spawn_local;

use super::client::AuthCheck;
use super::context::use_session;

/// Runs the load-time session check once and renders children only when the
/// session is valid or the page is public. An invalid session has already
/// been redirected to the login route by the time the check resolves.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let (status, set_status) = signal(Option::<AuthCheck>::None);

    spawn_local(async move {
        let check = session.check_auth().await;
        log::debug!("Auth check: {:?}", check);
        set_status.set(Some(check));
    });

    view! {
        <Show
            when=move || matches!(status.get(), Some(AuthCheck::Authorized) | Some(AuthCheck::Public))
            fallback=|| view! { <div class="auth-checking">"Checking session..."</div> }
        >
            {children()}
        </Show>
    }
}
