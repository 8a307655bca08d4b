use contracts::system::auth::UserResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::use_session;
use crate::system::auth::error::AuthError;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let (user, set_user) = signal(Option::<UserResponse>::None);
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let loader = session.clone();
    spawn_local(async move {
        match loader.current_user().await {
            Ok(info) => set_user.set(Some(info)),
            // already redirected to the login route
            Err(AuthError::Unauthenticated { .. }) | Err(AuthError::Unauthorized { .. }) => {}
            Err(e) => set_error_message.set(Some(e.to_string())),
        }
    });

    let on_logout = move |_| {
        let session = session.clone();
        spawn_local(async move {
            let outcome = session.logout().await;
            log::debug!("Logout finished: {:?}", outcome.remote);
        });
    };

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <span class="dashboard-user">
                    {move || user.get().map(|u| u.username).unwrap_or_default()}
                </span>
                <button class="btn-secondary" on:click=on_logout>"Logout"</button>
            </header>

            <Show when=move || error_message.get().is_some()>
                <div class="error-message">
                    {move || error_message.get().unwrap_or_default()}
                </div>
            </Show>
        </div>
    }
}
