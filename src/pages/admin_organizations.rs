//! Admin: Organization Registrations
//!
//! Moderation queue for signup submissions. Status tabs filter the list, the
//! side panel shows one registration in full, and the three verbs (approve,
//! reject, request info) refresh the queue on success.

use leptos::*;

use crate::api;
use crate::api::models::OrganizationRegistration;
use crate::components::{ListSkeleton, LoadError};
use crate::state::{use_notices, FilterQuery, RequestSequence};

const STATUS_TABS: &[(&str, &str)] = &[
    ("", "All"),
    ("pending", "Pending"),
    ("approved", "Approved"),
    ("rejected", "Rejected"),
    ("info_requested", "Info Requested"),
];

#[component]
pub fn AdminOrganizations() -> impl IntoView {
    let notices = use_notices();

    let (registrations, set_registrations) = create_signal(Vec::<OrganizationRegistration>::new());
    let (status_filter, set_status_filter) = create_signal(String::new());
    let (selected, set_selected) = create_signal(None::<OrganizationRegistration>);
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (reload, set_reload) = create_signal(0u32);
    let (acting, set_acting) = create_signal(false);
    let (reason, set_reason) = create_signal(String::new());

    let sequence = RequestSequence::new();
    create_effect(move |_| {
        reload.get();
        let status = status_filter.get();
        let ticket = sequence.begin();
        set_loading.set(true);
        spawn_local(async move {
            let mut query = FilterQuery::new();
            if !status.is_empty() {
                query.toggle("status", &status);
            }
            let result = api::registrations::list(&query).await;
            if !ticket.is_current() {
                return;
            }
            match result {
                Ok(page) => {
                    set_registrations.set(page.items);
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load registrations: {}", e).into(),
                    );
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let run_action = move |action: AdminAction| {
        let Some(registration) = selected.get_untracked() else {
            return;
        };
        if acting.get_untracked() {
            return;
        }
        let id = registration.id;
        let text = reason.get_untracked();
        set_acting.set(true);
        spawn_local(async move {
            let result = match action {
                AdminAction::Approve => api::registrations::approve(id).await,
                AdminAction::Reject => api::registrations::reject(id, &text).await,
                AdminAction::RequestInfo => api::registrations::request_info(id, &text).await,
            };
            match result {
                Ok(response) => {
                    notices.show_success(
                        response.message.as_deref().unwrap_or("Registration updated"),
                    );
                    set_selected.set(None);
                    set_reason.set(String::new());
                    set_reload.update(|n| *n += 1);
                }
                Err(e) => notices.show_error(&e.to_string()),
            }
            set_acting.set(false);
        });
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Organization Registrations"</h1>
                <p class="text-gray-400 mt-1">"Review and moderate signup submissions"</p>
            </div>

            <StatusStrip registrations=registrations />

            // Status tabs
            <div class="flex space-x-2 overflow-x-auto">
                {STATUS_TABS.iter().map(|(value, label)| {
                    let value = value.to_string();
                    let tab_value = value.clone();
                    view! {
                        <button
                            on:click=move |_| set_status_filter.set(tab_value.clone())
                            class=move || {
                                if status_filter.get() == value {
                                    "px-4 py-2 bg-primary-600 rounded-lg text-sm \
                                     font-medium whitespace-nowrap"
                                } else {
                                    "px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg \
                                     text-sm font-medium whitespace-nowrap"
                                }
                            }
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="grid lg:grid-cols-2 gap-6">
                // Queue
                <div>
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
                        let items = registrations.get();
                        if items.is_empty() {
                            return view! {
                                <div class="text-center py-12">
                                    <p class="text-gray-400">"No registrations in this bucket."</p>
                                </div>
                            }.into_view();
                        }
                        view! {
                            <div class="space-y-3">
                                {items.into_iter().map(|registration| {
                                    let row = registration.clone();
                                    view! {
                                        <button
                                            on:click=move |_| {
                                                set_reason.set(String::new());
                                                set_selected.set(Some(row.clone()));
                                            }
                                            class="w-full text-left bg-gray-800 rounded-xl p-4
                                                   border border-gray-700 hover:border-gray-600
                                                   transition-colors"
                                        >
                                            <div class="flex items-center justify-between">
                                                <span class="font-semibold">
                                                    {registration.organization_name.clone()}
                                                </span>
                                                <StatusBadge status=registration.status.clone() />
                                            </div>
                                            <div class="text-gray-400 text-sm mt-1">
                                                {registration
                                                    .organization_type_display
                                                    .clone()
                                                    .or(registration.organization_type.clone())
                                                    .unwrap_or_default()}
                                            </div>
                                            <div class="text-gray-500 text-xs mt-1">
                                                {registration.created_at.clone().unwrap_or_default()}
                                            </div>
                                        </button>
                                    }
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }}
                </div>

                // Detail panel
                <div>
                    {move || {
                        let Some(registration) = selected.get() else {
                            return view! {
                                <div class="bg-gray-800 rounded-xl p-6 border border-gray-700
                                            text-center text-gray-400">
                                    "Select a registration to review it."
                                </div>
                            }.into_view();
                        };
                        view! {
                            <div class="bg-gray-800 rounded-xl p-6 border border-gray-700 space-y-4">
                                <div class="flex items-center justify-between">
                                    <h2 class="text-xl font-bold">
                                        {registration.organization_name.clone()}
                                    </h2>
                                    <StatusBadge status=registration.status.clone() />
                                </div>

                                <dl class="grid grid-cols-2 gap-3 text-sm">
                                    <DetailRow
                                        label="Type"
                                        value=registration
                                            .organization_type_display
                                            .clone()
                                            .or(registration.organization_type.clone())
                                    />
                                    <DetailRow
                                        label="Headquarters"
                                        value=registration.headquarters.clone()
                                    />
                                    <DetailRow label="Country" value=registration.country.clone() />
                                    <DetailRow label="Website" value=registration.website.clone() />
                                    <DetailRow
                                        label="Contact"
                                        value=Some(format!(
                                            "{} {}",
                                            registration.first_name.clone().unwrap_or_default(),
                                            registration.last_name.clone().unwrap_or_default()
                                        ))
                                    />
                                    <DetailRow label="Email" value=registration.email.clone() />
                                    <DetailRow label="Position" value=registration.position.clone() />
                                    <DetailRow
                                        label="Funding Stage"
                                        value=registration
                                            .funding_stage_display
                                            .clone()
                                            .or(registration.funding_stage.clone())
                                    />
                                </dl>

                                {(!registration.sectors.is_empty()).then(|| view! {
                                    <div class="flex flex-wrap gap-1">
                                        {registration.sectors.iter().map(|sector| view! {
                                            <span class="bg-gray-700 text-gray-300 text-xs
                                                         px-2 py-0.5 rounded-full">
                                                {sector.clone()}
                                            </span>
                                        }).collect_view()}
                                    </div>
                                })}

                                {registration.description.clone().map(|description| view! {
                                    <p class="text-gray-300 text-sm whitespace-pre-line">
                                        {description}
                                    </p>
                                })}

                                {registration.admin_notes.clone().map(|admin_notes| view! {
                                    <div class="bg-gray-700/50 rounded-lg p-3 text-sm">
                                        <span class="text-gray-400">"Admin notes: "</span>
                                        {admin_notes}
                                    </div>
                                })}

                                // Moderation actions
                                <div class="border-t border-gray-700 pt-4 space-y-3">
                                    <textarea
                                        rows=2
                                        placeholder="Reason / message (required for reject and info requests)"
                                        prop:value=move || reason.get()
                                        on:input=move |ev| set_reason.set(event_target_value(&ev))
                                        class="w-full bg-gray-700 rounded-lg px-3 py-2 text-sm
                                               border border-gray-600 focus:border-primary-500
                                               focus:outline-none"
                                    />
                                    <div class="flex space-x-2">
                                        <button
                                            on:click=move |_| run_action(AdminAction::Approve)
                                            disabled=move || acting.get()
                                            class="flex-1 py-2 bg-green-700 hover:bg-green-600
                                                   disabled:bg-gray-700 rounded-lg text-sm
                                                   font-medium transition-colors"
                                        >
                                            "Approve"
                                        </button>
                                        <button
                                            on:click=move |_| run_action(AdminAction::Reject)
                                            disabled=move || {
                                                acting.get() || reason.get().trim().is_empty()
                                            }
                                            class="flex-1 py-2 bg-red-700 hover:bg-red-600
                                                   disabled:bg-gray-700 rounded-lg text-sm
                                                   font-medium transition-colors"
                                        >
                                            "Reject"
                                        </button>
                                        <button
                                            on:click=move |_| run_action(AdminAction::RequestInfo)
                                            disabled=move || {
                                                acting.get() || reason.get().trim().is_empty()
                                            }
                                            class="flex-1 py-2 bg-gray-700 hover:bg-gray-600
                                                   disabled:bg-gray-800 rounded-lg text-sm
                                                   font-medium transition-colors"
                                        >
                                            "Request Info"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }.into_view()
                    }}
                </div>
            </div>
        </div>
    }
}

#[derive(Clone, Copy)]
enum AdminAction {
    Approve,
    Reject,
    RequestInfo,
}

/// Counts per status, computed from the loaded queue
#[component]
fn StatusStrip(registrations: ReadSignal<Vec<OrganizationRegistration>>) -> impl IntoView {
    let count_for = move |status: &'static str| {
        registrations.with(|items| {
            items
                .iter()
                .filter(|r| status.is_empty() || r.status == status)
                .count()
        })
    };
    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <div class="bg-gray-800 rounded-lg p-3 border border-gray-700 text-center">
                <div class="text-2xl font-bold">{move || count_for("")}</div>
                <div class="text-gray-400 text-xs">"Loaded"</div>
            </div>
            <div class="bg-gray-800 rounded-lg p-3 border border-gray-700 text-center">
                <div class="text-2xl font-bold text-yellow-400">
                    {move || count_for("pending")}
                </div>
                <div class="text-gray-400 text-xs">"Pending"</div>
            </div>
            <div class="bg-gray-800 rounded-lg p-3 border border-gray-700 text-center">
                <div class="text-2xl font-bold text-green-400">
                    {move || count_for("approved")}
                </div>
                <div class="text-gray-400 text-xs">"Approved"</div>
            </div>
            <div class="bg-gray-800 rounded-lg p-3 border border-gray-700 text-center">
                <div class="text-2xl font-bold text-red-400">
                    {move || count_for("rejected")}
                </div>
                <div class="text-gray-400 text-xs">"Rejected"</div>
            </div>
        </div>
    }
}

#[component]
fn StatusBadge(status: String) -> impl IntoView {
    let color = match status.as_str() {
        "approved" => "bg-green-700 text-green-100",
        "rejected" => "bg-red-700 text-red-100",
        "info_requested" => "bg-blue-700 text-blue-100",
        _ => "bg-yellow-700 text-yellow-100",
    };
    view! {
        <span class=format!("{} text-xs px-2 py-0.5 rounded-full", color)>
            {status}
        </span>
    }
}

#[component]
fn DetailRow(label: &'static str, value: Option<String>) -> impl IntoView {
    view! {
        <div>
            <dt class="text-gray-500 text-xs uppercase">{label}</dt>
            <dd class="mt-0.5">{value.filter(|v| !v.trim().is_empty()).unwrap_or_else(|| "—".into())}</dd>
        </div>
    }
}
