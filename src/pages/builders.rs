//! Ecosystem Builder Pages
//!
//! One directory page and one listing form shared by hubs, incubators,
//! accelerators, and universities; the kind is fixed per route.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::builders::{BuilderForm, BuilderKind};
use crate::api::models::EcosystemBuilder;
use crate::api::ApiError;
use crate::components::{ListSkeleton, LoadError, TextArea, TextField};
use crate::state::use_notices;

/// Directory of one builder kind
#[component]
pub fn BuilderDirectory(kind: BuilderKind) -> impl IntoView {
    let (builders, set_builders) = create_signal(Vec::<EcosystemBuilder>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (reload, set_reload) = create_signal(0u32);

    create_effect(move |_| {
        reload.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::builders::list(kind).await {
                Ok(items) => {
                    set_builders.set(items);
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load {}: {}", kind.label(), e).into(),
                    );
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let register_href = match kind {
        BuilderKind::Hub => "/register/hub",
        BuilderKind::Incubator => "/register/incubator",
        BuilderKind::Accelerator => "/register/accelerator",
        BuilderKind::University => "/register/university",
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">{kind.label()}</h1>
                    <p class="text-gray-400 mt-1">{kind.blurb()}</p>
                </div>
                <A
                    href=register_href
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                           font-medium transition-colors"
                >
                    {format!("List Your {}", kind.singular())}
                </A>
            </div>

            {move || {
                if loading.get() {
                    return view! { <ListSkeleton count=6 /> }.into_view();
                }
                if let Some(message) = error.get() {
                    return view! {
                        <LoadError
                            message=message
                            on_retry=move |_| set_reload.update(|n| *n += 1)
                        />
                    }.into_view();
                }
                let items = builders.get();
                if items.is_empty() {
                    return view! {
                        <div class="text-center py-12">
                            <p class="text-gray-400">
                                {format!("No {} listed yet.", kind.label().to_lowercase())}
                            </p>
                        </div>
                    }.into_view();
                }
                view! {
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                        {items.into_iter().map(|builder| view! {
                            <BuilderCard builder=builder />
                        }).collect_view()}
                    </div>
                }.into_view()
            }}
        </div>
    }
}

#[component]
fn BuilderCard(builder: EcosystemBuilder) -> impl IntoView {
    let location = [builder.city.clone(), builder.country.clone()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
            <h3 class="font-semibold">{builder.name}</h3>
            <p class="text-gray-400 text-sm mt-2 line-clamp-3">
                {builder.description.unwrap_or_default()}
            </p>
            <div class="flex items-center justify-between mt-3 text-sm">
                <span class="text-gray-500">{location}</span>
                {builder.website.map(|website| view! {
                    <a
                        href=website
                        target="_blank"
                        rel="noopener"
                        class="text-primary-400 hover:text-primary-300"
                    >
                        "Website"
                    </a>
                })}
            </div>
        </div>
    }
}

/// Listing form for one builder kind
#[component]
pub fn BuilderRegister(kind: BuilderKind) -> impl IntoView {
    let notices = use_notices();

    let name = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let website = create_rw_signal(String::new());
    let city = create_rw_signal(String::new());
    let country = create_rw_signal(String::new());
    let contact_email = create_rw_signal(String::new());

    let (submitting, set_submitting) = create_signal(false);
    let (submitted, set_submitted) = create_signal(false);
    let (api_error, set_api_error) = create_signal(None::<ApiError>);

    let field_error = move |field: &'static str| {
        Signal::derive(move || {
            api_error
                .get()
                .as_ref()
                .and_then(|e| e.field(field))
                .map(str::to_string)
        })
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let form = BuilderForm {
            name: name.get_untracked(),
            description: description.get_untracked(),
            website: website.get_untracked(),
            city: city.get_untracked(),
            country: country.get_untracked(),
            contact_email: contact_email.get_untracked(),
        };
        set_submitting.set(true);
        spawn_local(async move {
            match api::builders::create(kind, &form).await {
                Ok(_) => {
                    set_api_error.set(None);
                    set_submitted.set(true);
                    notices.show_success("Listing submitted for review");
                }
                Err(e) => {
                    notices.show_error(&e.to_string());
                    set_api_error.set(Some(e));
                }
            }
            set_submitting.set(false);
        });
    };

    let directory_href = match kind {
        BuilderKind::Hub => "/hubs",
        BuilderKind::Incubator => "/incubators",
        BuilderKind::Accelerator => "/accelerators",
        BuilderKind::University => "/universities",
    };

    view! {
        {move || {
            if submitted.get() {
                return view! {
                    <div class="max-w-xl mx-auto text-center py-16">
                        <div class="text-5xl mb-4">"✅"</div>
                        <h1 class="text-2xl font-bold mb-2">"Listing Submitted"</h1>
                        <p class="text-gray-400 mb-6">
                            "Thanks! Your listing will appear once it has been reviewed."
                        </p>
                        <A
                            href=directory_href
                            class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg
                                   font-medium transition-colors"
                        >
                            {format!("Back to {}", kind.label())}
                        </A>
                    </div>
                }.into_view();
            }
            view! {
                <div class="max-w-xl mx-auto space-y-6">
                    <div>
                        <h1 class="text-3xl font-bold">
                            {format!("List Your {}", kind.singular())}
                        </h1>
                        <p class="text-gray-400 mt-1">{kind.blurb()}</p>
                    </div>
                    <form on:submit=submit class="bg-gray-800 rounded-xl p-6 space-y-4">
                        <TextField
                            label="Name"
                            value=name
                            required=true
                            error=field_error("name")
                        />
                        <TextArea
                            label="Description"
                            value=description
                            error=field_error("description")
                        />
                        <TextField
                            label="Website"
                            value=website
                            input_type="url"
                            placeholder="https://"
                            error=field_error("website")
                        />
                        <div class="grid grid-cols-2 gap-4">
                            <TextField label="City" value=city error=field_error("city") />
                            <TextField label="Country" value=country error=field_error("country") />
                        </div>
                        <TextField
                            label="Contact Email"
                            value=contact_email
                            input_type="email"
                            error=field_error("contact_email")
                        />
                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="w-full py-3 bg-primary-600 hover:bg-primary-700
                                   disabled:bg-gray-700 rounded-lg font-medium transition-colors"
                        >
                            {move || if submitting.get() { "Submitting..." } else { "Submit Listing" }}
                        </button>
                    </form>
                </div>
            }.into_view()
        }}
    }
}
