//! Admin: Company Moderation
//!
//! Review queue for company registrations submitted through the public form.
//! Moderation status changes go through the company update endpoint; rejected
//! listings can be removed outright.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::models::CompanySummary;
use crate::components::{ListSkeleton, LoadError};
use crate::state::{use_notices, FilterQuery, RequestSequence};

const MODERATION_TABS: &[(&str, &str)] = &[
    ("", "All"),
    ("pending", "Pending"),
    ("approved", "Approved"),
    ("rejected", "Rejected"),
];

#[component]
pub fn AdminCompanies() -> impl IntoView {
    let notices = use_notices();

    let (companies, set_companies) = create_signal(Vec::<CompanySummary>::new());
    let (moderation_filter, set_moderation_filter) = create_signal("pending".to_string());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (reload, set_reload) = create_signal(0u32);
    let (acting_on, set_acting_on) = create_signal(None::<String>);

    let sequence = RequestSequence::new();
    create_effect(move |_| {
        reload.get();
        let moderation = moderation_filter.get();
        let ticket = sequence.begin();
        set_loading.set(true);
        spawn_local(async move {
            let mut query = FilterQuery::new();
            if !moderation.is_empty() {
                query.toggle("moderation_status", &moderation);
            }
            let result = api::companies::list(&query).await;
            if !ticket.is_current() {
                return;
            }
            match result {
                Ok(page) => {
                    set_companies.set(page.items);
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load companies: {}", e).into());
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let moderate = move |slug: String, status: &'static str| {
        if acting_on.get_untracked().is_some() {
            return;
        }
        set_acting_on.set(Some(slug.clone()));
        spawn_local(async move {
            match api::companies::set_moderation_status(&slug, status).await {
                Ok(_) => {
                    notices.show_success(&format!("Company {}", status));
                    set_reload.update(|n| *n += 1);
                }
                Err(e) => notices.show_error(&e.to_string()),
            }
            set_acting_on.set(None);
        });
    };

    let remove = move |slug: String| {
        if acting_on.get_untracked().is_some() {
            return;
        }
        set_acting_on.set(Some(slug.clone()));
        spawn_local(async move {
            match api::companies::delete(&slug).await {
                Ok(()) => {
                    notices.show_success("Listing removed");
                    set_reload.update(|n| *n += 1);
                }
                Err(e) => notices.show_error(&e.to_string()),
            }
            set_acting_on.set(None);
        });
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Company Moderation"</h1>
                <p class="text-gray-400 mt-1">"Approve or reject submitted company profiles"</p>
            </div>

            // Moderation tabs
            <div class="flex space-x-2">
                {MODERATION_TABS.iter().map(|(value, label)| {
                    let value = value.to_string();
                    let tab_value = value.clone();
                    view! {
                        <button
                            on:click=move |_| set_moderation_filter.set(tab_value.clone())
                            class=move || {
                                if moderation_filter.get() == value {
                                    "px-4 py-2 bg-primary-600 rounded-lg text-sm font-medium"
                                } else {
                                    "px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg \
                                     text-sm font-medium"
                                }
                            }
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </div>

            {move || {
                if loading.get() {
                    return view! { <ListSkeleton count=5 /> }.into_view();
                }
                if let Some(message) = error.get() {
                    return view! {
                        <LoadError
                            message=message
                            on_retry=move |_| set_reload.update(|n| *n += 1)
                        />
                    }.into_view();
                }
                let show_remove = moderation_filter.get() == "rejected";
                let items = companies.get();
                if items.is_empty() {
                    return view! {
                        <div class="text-center py-12">
                            <p class="text-gray-400">"Nothing waiting in this bucket."</p>
                        </div>
                    }.into_view();
                }
                view! {
                    <div class="space-y-3">
                        {items.into_iter().map(|company| {
                            let approve_slug = company.slug.clone();
                            let reject_slug = company.slug.clone();
                            let remove_slug = company.slug.clone();
                            let busy = |slug: String| {
                                move || acting_on.with(|a| a.as_deref() == Some(slug.as_str()))
                            };
                            let approve_busy = busy(company.slug.clone());
                            let reject_busy = busy(company.slug.clone());
                            let remove_busy = busy(company.slug.clone());
                            view! {
                                <div class="bg-gray-800 rounded-xl p-4 border border-gray-700
                                            flex items-center justify-between">
                                    <div class="min-w-0">
                                        <A
                                            href=format!("/companies/{}", company.slug)
                                            class="font-semibold hover:text-primary-400
                                                   transition-colors"
                                        >
                                            {company.name.clone()}
                                        </A>
                                        <p class="text-gray-400 text-sm line-clamp-1">
                                            {company.short_description.clone().unwrap_or_default()}
                                        </p>
                                        <div class="text-gray-500 text-xs mt-1">
                                            {[
                                                company.hq_city.clone(),
                                                company.hq_country.clone(),
                                            ]
                                            .into_iter()
                                            .flatten()
                                            .collect::<Vec<_>>()
                                            .join(", ")}
                                        </div>
                                    </div>
                                    <div class="flex space-x-2 ml-4">
                                        <button
                                            on:click=move |_| {
                                                moderate(approve_slug.clone(), "approved")
                                            }
                                            disabled=approve_busy
                                            class="px-4 py-2 bg-green-700 hover:bg-green-600
                                                   disabled:bg-gray-700 rounded-lg text-sm
                                                   font-medium transition-colors"
                                        >
                                            "Approve"
                                        </button>
                                        <button
                                            on:click=move |_| {
                                                moderate(reject_slug.clone(), "rejected")
                                            }
                                            disabled=reject_busy
                                            class="px-4 py-2 bg-red-700 hover:bg-red-600
                                                   disabled:bg-gray-700 rounded-lg text-sm
                                                   font-medium transition-colors"
                                        >
                                            "Reject"
                                        </button>
                                        {show_remove.then(|| view! {
                                            <button
                                                on:click=move |_| remove(remove_slug.clone())
                                                disabled=remove_busy
                                                class="px-4 py-2 bg-gray-700 hover:bg-gray-600
                                                       disabled:bg-gray-700 rounded-lg text-sm
                                                       font-medium transition-colors"
                                            >
                                                "Remove"
                                            </button>
                                        })}
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_view()
            }}
        </div>
    }
}
