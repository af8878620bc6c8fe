//! Auth Pages
//!
//! Login (honoring the `next` redirect target the route guard attaches) and
//! account registration, which sends the new user back to login.

use leptos::*;
use leptos_router::*;

use crate::auth::use_session;
use crate::components::TextField;
use crate::state::use_notices;

#[component]
pub fn Login() -> impl IntoView {
    let session = use_session();
    let query = use_query_map();

    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);
    let navigate = use_navigate();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let username = username.get_untracked();
        let password = password.get_untracked();
        if username.is_empty() || password.is_empty() {
            set_error.set(Some("Username and password are required".to_string()));
            return;
        }
        let next = query.with_untracked(|q| {
            q.get("next")
                .cloned()
                .filter(|n| n.starts_with('/'))
                .unwrap_or_else(|| "/dashboard".to_string())
        });
        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match session.login(&username, &password).await {
                Ok(()) => {
                    navigate(&next, Default::default());
                }
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="max-w-md mx-auto py-12">
            <div class="text-center mb-8">
                <h1 class="text-3xl font-bold">"Sign In"</h1>
                <p class="text-gray-400 mt-1">"Access your dashboard and listings"</p>
            </div>
            <form on:submit=submit class="bg-gray-800 rounded-xl p-6 space-y-4">
                {move || error.get().map(|message| view! {
                    <div class="bg-red-900/30 border border-red-700 rounded-lg p-3
                                text-red-300 text-sm">
                        {message}
                    </div>
                })}
                <TextField label="Username" value=username required=true />
                <TextField label="Password" value=password input_type="password" required=true />
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-700
                           rounded-lg font-medium transition-colors"
                >
                    {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                </button>
                <p class="text-center text-gray-400 text-sm">
                    "No account yet? "
                    <A href="/register" class="text-primary-400 hover:text-primary-300">
                        "Create one"
                    </A>
                </p>
            </form>
        </div>
    }
}

#[component]
pub fn Register() -> impl IntoView {
    let session = use_session();
    let notices = use_notices();

    let username = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirm = create_rw_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);
    let navigate = use_navigate();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let username = username.get_untracked();
        let email = email.get_untracked();
        let password = password.get_untracked();
        if password != confirm.get_untracked() {
            set_error.set(Some("Passwords do not match".to_string()));
            return;
        }
        if password.len() < 8 {
            set_error.set(Some("Password must be at least 8 characters".to_string()));
            return;
        }
        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match session.register(&username, &email, &password).await {
                Ok(()) => {
                    notices.show_success("Account created. Please sign in.");
                    navigate("/login", Default::default());
                }
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="max-w-md mx-auto py-12">
            <div class="text-center mb-8">
                <h1 class="text-3xl font-bold">"Create Account"</h1>
                <p class="text-gray-400 mt-1">"Claim and manage your listings"</p>
            </div>
            <form on:submit=submit class="bg-gray-800 rounded-xl p-6 space-y-4">
                {move || error.get().map(|message| view! {
                    <div class="bg-red-900/30 border border-red-700 rounded-lg p-3
                                text-red-300 text-sm">
                        {message}
                    </div>
                })}
                <TextField label="Username" value=username required=true />
                <TextField label="Email" value=email input_type="email" required=true />
                <TextField label="Password" value=password input_type="password" required=true />
                <TextField
                    label="Confirm Password"
                    value=confirm
                    input_type="password"
                    required=true
                />
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-700
                           rounded-lg font-medium transition-colors"
                >
                    {move || if submitting.get() { "Creating account..." } else { "Create Account" }}
                </button>
                <p class="text-center text-gray-400 text-sm">
                    "Already registered? "
                    <A href="/login" class="text-primary-400 hover:text-primary-300">
                        "Sign in"
                    </A>
                </p>
            </form>
        </div>
    }
}
