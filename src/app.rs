//! App Root Component
//!
//! Main application component with routing, global providers, and the
//! layout shell.

use leptos::*;
use leptos_router::*;

use crate::api::builders::BuilderKind;
use crate::api::client;
use crate::auth::provide_session;
use crate::components::{Nav, RedirectAuthenticated, RequireSession, Toast};
use crate::pages::{
    AdminCompanies, AdminContacts, AdminOrganizations, BuilderDirectory, BuilderRegister,
    Companies, CompanyDetail, Contact, Content, ContentDetail, Dashboard, Ecosystem, Funding,
    Home, Industries, InvestorDetail, Investors, Login, OrganizationSignup, People, Register,
    RegisterCompany,
};
use crate::state::provide_notices;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide notice + session state to all components
    provide_notices();
    provide_session();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Home />

                        // Directory
                        <Route path="/companies" view=Companies />
                        <Route path="/companies/:slug" view=CompanyDetail />
                        <Route path="/investors" view=Investors />
                        <Route path="/investors/:slug" view=InvestorDetail />
                        <Route path="/people" view=People />
                        <Route path="/funding" view=Funding />
                        <Route path="/industries" view=Industries />
                        <Route path="/ecosystem" view=Ecosystem />
                        <Route path="/content" view=Content />
                        <Route path="/content/:slug" view=ContentDetail />

                        // Ecosystem builders
                        <Route path="/hubs" view=|| view! {
                            <BuilderDirectory kind=BuilderKind::Hub />
                        } />
                        <Route path="/incubators" view=|| view! {
                            <BuilderDirectory kind=BuilderKind::Incubator />
                        } />
                        <Route path="/accelerators" view=|| view! {
                            <BuilderDirectory kind=BuilderKind::Accelerator />
                        } />
                        <Route path="/universities" view=|| view! {
                            <BuilderDirectory kind=BuilderKind::University />
                        } />
                        <Route path="/register/hub" view=|| view! {
                            <BuilderRegister kind=BuilderKind::Hub />
                        } />
                        <Route path="/register/incubator" view=|| view! {
                            <BuilderRegister kind=BuilderKind::Incubator />
                        } />
                        <Route path="/register/accelerator" view=|| view! {
                            <BuilderRegister kind=BuilderKind::Accelerator />
                        } />
                        <Route path="/register/university" view=|| view! {
                            <BuilderRegister kind=BuilderKind::University />
                        } />

                        // Registration and contact
                        <Route path="/register-company" view=RegisterCompany />
                        <Route path="/signup-organization" view=OrganizationSignup />
                        <Route path="/contact" view=Contact />

                        // Auth (anonymous only)
                        <Route path="/login" view=|| view! {
                            <RedirectAuthenticated><Login /></RedirectAuthenticated>
                        } />
                        <Route path="/register" view=|| view! {
                            <RedirectAuthenticated><Register /></RedirectAuthenticated>
                        } />

                        // Private
                        <Route path="/dashboard" view=|| view! {
                            <RequireSession><Dashboard /></RequireSession>
                        } />
                        <Route path="/admin/organizations" view=|| view! {
                            <RequireSession><AdminOrganizations /></RequireSession>
                        } />
                        <Route path="/admin/contacts" view=|| view! {
                            <RequireSession><AdminContacts /></RequireSession>
                        } />
                        <Route path="/admin/companies" view=|| view! {
                            <RequireSession><AdminCompanies /></RequireSession>
                        } />

                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-4 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-400">
                <span>"VentureScope — startup ecosystem directory"</span>
                <div class="flex items-center space-x-4">
                    <A href="/contact" class="hover:text-white transition-colors">"Contact"</A>
                    <A href="/register-company" class="hover:text-white transition-colors">
                        "Add Your Company"
                    </A>
                    <ApiSettings />
                </div>
            </div>
        </footer>
    }
}

/// Inline override for the API base URL. The client reads the stored value
/// on every request, so saving takes effect immediately.
#[component]
fn ApiSettings() -> impl IntoView {
    let (open, set_open) = create_signal(false);
    let (value, set_value) = create_signal(client::api_base());

    let save = move |_| {
        client::set_api_base(&value.get_untracked());
        set_open.set(false);
    };

    view! {
        <div class="relative">
            <button
                on:click=move |_| set_open.update(|o| *o = !*o)
                class="hover:text-white transition-colors"
            >
                "API"
            </button>
            {move || open.get().then(|| view! {
                <div class="absolute bottom-8 right-0 bg-gray-800 border border-gray-700
                            rounded-lg p-3 w-80 space-y-2 shadow-lg">
                    <label class="block text-xs text-gray-500 uppercase">"API endpoint"</label>
                    <input
                        type="text"
                        prop:value=value
                        on:input=move |ev| set_value.set(event_target_value(&ev))
                        class="w-full bg-gray-900 border border-gray-700 rounded px-2 py-1
                               text-sm text-white"
                    />
                    <button
                        on:click=save
                        class="px-3 py-1 bg-primary-600 hover:bg-primary-700 rounded
                               text-sm text-white font-medium transition-colors"
                    >
                        "Save"
                    </button>
                </div>
            })}
        </div>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back to the Directory"
            </A>
        </div>
    }
}
