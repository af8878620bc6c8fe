//! Navigation Component
//!
//! Header navigation bar with logo, directory links, and session controls.

use leptos::*;
use leptos_router::*;

use crate::auth::{use_session, SessionState};
use crate::state::use_notices;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let session = use_session();
    let notices = use_notices();
    let navigate = use_navigate();

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🚀"</span>
                        <span class="text-xl font-bold text-white">"VentureScope"</span>
                    </A>

                    // Directory links
                    <div class="hidden md:flex items-center space-x-1">
                        <NavLink href="/companies" label="Companies" />
                        <NavLink href="/investors" label="Investors" />
                        <NavLink href="/funding" label="Funding" />
                        <NavLink href="/industries" label="Industries" />
                        <NavLink href="/ecosystem" label="Ecosystem" />
                        <NavLink href="/hubs" label="Hubs" />
                        <NavLink href="/content" label="Resources" />
                    </div>

                    // Session controls
                    <div class="flex items-center space-x-2">
                        {move || {
                            if notices.loading.get() {
                                view! { <span class="loading-spinner w-4 h-4" /> }.into_view()
                            } else {
                                ().into_view()
                            }
                        }}
                        {move || {
                            let navigate = navigate.clone();
                            match session.state.get() {
                                SessionState::Unknown => ().into_view(),
                                SessionState::Anonymous => view! {
                                    <NavLink href="/login" label="Sign In" />
                                    <A
                                        href="/signup-organization"
                                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700
                                               rounded-lg text-white font-medium transition-colors"
                                    >
                                        "Join the Directory"
                                    </A>
                                }.into_view(),
                                SessionState::Authenticated(user) => view! {
                                    <NavLink href="/dashboard" label="Dashboard" />
                                    {if user.is_staff {
                                        view! {
                                            <NavLink href="/admin/organizations" label="Admin" />
                                        }.into_view()
                                    } else {
                                        ().into_view()
                                    }}
                                    <span class="text-gray-400 text-sm hidden lg:inline">
                                        {user.username.clone()}
                                    </span>
                                    <button
                                        on:click=move |_| {
                                            session.logout();
                                            navigate("/login", Default::default());
                                        }
                                        class="px-3 py-2 rounded-lg text-gray-300 hover:text-white
                                               hover:bg-gray-700 transition-colors"
                                    >
                                        "Sign Out"
                                    </button>
                                }.into_view(),
                            }
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
