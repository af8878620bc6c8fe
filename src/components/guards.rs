//! Route Guards
//!
//! Conditional rendering over the session state. Both guards block while the
//! session is still `Unknown` so the initial token decode never flashes the
//! wrong view.

use leptos::*;
use leptos_router::*;

use crate::auth::{use_session, SessionState};

/// Renders children only for an authenticated session.
///
/// `Unknown` shows a full-screen placeholder (no redirect yet); `Anonymous`
/// redirects to the sign-in view carrying the originally requested location
/// in `next` so login can return the user there.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let location = use_location();

    view! {
        {move || match session.state.get() {
            SessionState::Unknown => view! {
                <div class="fixed inset-0 bg-gray-900 flex items-center justify-center">
                    <div class="loading-spinner w-8 h-8" />
                </div>
            }.into_view(),
            SessionState::Anonymous => {
                let search = location.search.get();
                let next = if search.is_empty() {
                    location.pathname.get()
                } else {
                    format!("{}?{}", location.pathname.get(), search)
                };
                let path = format!("/login?next={}", urlencoding::encode(&next));
                view! { <Redirect path=path /> }.into_view()
            }
            SessionState::Authenticated(_) => children().into_view(),
        }}
    }
}

/// Renders children only for an anonymous session.
///
/// Keeps signed-in users off the login/register views: `Unknown` renders
/// nothing, `Authenticated` redirects to the dashboard.
#[component]
pub fn RedirectAuthenticated(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        {move || match session.state.get() {
            SessionState::Unknown => ().into_view(),
            SessionState::Authenticated(_) => {
                view! { <Redirect path="/dashboard" /> }.into_view()
            }
            SessionState::Anonymous => children().into_view(),
        }}
    }
}
