use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::use_session;
use crate::system::auth::navigation::Navigator;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();
        let session = session.clone();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match session.login(&username_val, &password_val).await {
                Ok(_) => {
                    let landing = session.config().landing_route.clone();
                    session.navigator().redirect(&landing);
                }
                Err(e) => {
                    set_error_message.set(Some(format!("Login failed: {}", e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <h2>"Sign in"</h2>
            {move || error_message.get().map(|message| view! { <p class="error-message">{message}</p> })}
            <input
                type="text"
                placeholder="Username"
                autocomplete="username"
                on:input=move |ev| set_username.set(event_target_value(&ev))
                prop:value=move || username.get()
                prop:disabled=move || is_loading.get()
            />
            <input
                type="password"
                placeholder="Password"
                autocomplete="current-password"
                on:input=move |ev| set_password.set(event_target_value(&ev))
                prop:value=move || password.get()
                prop:disabled=move || is_loading.get()
            />
            <button type="submit" prop:disabled=move || is_loading.get()>
                {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
            </button>
        </form>
    }
}
