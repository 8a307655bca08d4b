use crate::system::auth::context::AuthProvider;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::dashboard::DashboardPage;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! {
        <RequireAuth>
            <DashboardPage />
        </RequireAuth>
    }
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <Router>
                <Routes fallback=|| view! { <div>"Page not found."</div> }>
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/dashboard") view=ProtectedDashboard />
                    <Route path=path!("/") view=ProtectedDashboard />
                </Routes>
            </Router>
        </AuthProvider>
    }
}
