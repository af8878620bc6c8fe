//! Admin: Contact Inbox
//!
//! Messages from the public contact form, with resolve and note-taking
//! actions.

use leptos::*;

use crate::api;
use crate::api::models::ContactMessage;
use crate::components::{ListSkeleton, LoadError};
use crate::state::{use_notices, FilterQuery, RequestSequence};

#[component]
pub fn AdminContacts() -> impl IntoView {
    let notices = use_notices();

    let (messages, set_messages) = create_signal(Vec::<ContactMessage>::new());
    let (selected, set_selected) = create_signal(None::<ContactMessage>);
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (reload, set_reload) = create_signal(0u32);
    let (acting, set_acting) = create_signal(false);
    let (notes, set_notes) = create_signal(String::new());
    let (unresolved_only, set_unresolved_only) = create_signal(false);

    let sequence = RequestSequence::new();
    create_effect(move |_| {
        reload.get();
        let filter_unresolved = unresolved_only.get();
        let ticket = sequence.begin();
        set_loading.set(true);
        spawn_local(async move {
            let mut query = FilterQuery::new();
            if filter_unresolved {
                query.toggle("status", "new");
            }
            let result = api::contacts::list(&query).await;
            if !ticket.is_current() {
                return;
            }
            match result {
                Ok(page) => {
                    set_messages.set(page.items);
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load contact messages: {}", e).into(),
                    );
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let resolve = move |_| {
        let Some(message) = selected.get_untracked() else {
            return;
        };
        if acting.get_untracked() {
            return;
        }
        set_acting.set(true);
        spawn_local(async move {
            match api::contacts::mark_resolved(message.id).await {
                Ok(_) => {
                    notices.show_success("Marked resolved");
                    set_selected.set(None);
                    set_reload.update(|n| *n += 1);
                }
                Err(e) => notices.show_error(&e.to_string()),
            }
            set_acting.set(false);
        });
    };

    let save_notes = move |_| {
        let Some(message) = selected.get_untracked() else {
            return;
        };
        let text = notes.get_untracked();
        if text.trim().is_empty() || acting.get_untracked() {
            return;
        }
        set_acting.set(true);
        spawn_local(async move {
            match api::contacts::add_notes(message.id, &text).await {
                Ok(_) => {
                    notices.show_success("Notes saved");
                    set_notes.set(String::new());
                    set_reload.update(|n| *n += 1);
                }
                Err(e) => notices.show_error(&e.to_string()),
            }
            set_acting.set(false);
        });
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Contact Inbox"</h1>
                    <p class="text-gray-400 mt-1">
                        {move || format!("{} messages", messages.get().len())}
                    </p>
                </div>
                <label class="flex items-center space-x-2 text-sm text-gray-300 cursor-pointer">
                    <input
                        type="checkbox"
                        checked=move || unresolved_only.get()
                        on:change=move |_| set_unresolved_only.update(|v| *v = !*v)
                        class="rounded border-gray-600 bg-gray-700"
                    />
                    <span>"Unresolved only"</span>
                </label>
            </div>

            <div class="grid lg:grid-cols-2 gap-6">
                // Inbox list
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
                        let items = messages.get();
                        if items.is_empty() {
                            return view! {
                                <div class="text-center py-12">
                                    <p class="text-gray-400">"Inbox is empty."</p>
                                </div>
                            }.into_view();
                        }
                        view! {
                            <div class="space-y-3">
                                {items.into_iter().map(|message| {
                                    let row = message.clone();
                                    let resolved = message.status.as_deref() == Some("resolved");
                                    view! {
                                        <button
                                            on:click=move |_| {
                                                set_notes.set(String::new());
                                                set_selected.set(Some(row.clone()));
                                            }
                                            class="w-full text-left bg-gray-800 rounded-xl p-4
                                                   border border-gray-700 hover:border-gray-600
                                                   transition-colors"
                                        >
                                            <div class="flex items-center justify-between">
                                                <span class="font-semibold">
                                                    {message.name.clone()}
                                                </span>
                                                {if resolved {
                                                    view! {
                                                        <span class="bg-green-700 text-green-100
                                                                     text-xs px-2 py-0.5
                                                                     rounded-full">
                                                            "resolved"
                                                        </span>
                                                    }.into_view()
                                                } else {
                                                    view! {
                                                        <span class="bg-yellow-700 text-yellow-100
                                                                     text-xs px-2 py-0.5
                                                                     rounded-full">
                                                            "open"
                                                        </span>
                                                    }.into_view()
                                                }}
                                            </div>
                                            <div class="text-gray-400 text-sm mt-1 line-clamp-2">
                                                {message.message.clone()}
                                            </div>
                                            <div class="text-gray-500 text-xs mt-1">
                                                {message.created_at.clone().unwrap_or_default()}
                                            </div>
                                        </button>
                                    }
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }}
                </div>

                // Message detail
                <div>
                    {move || {
                        let Some(message) = selected.get() else {
                            return view! {
                                <div class="bg-gray-800 rounded-xl p-6 border border-gray-700
                                            text-center text-gray-400">
                                    "Select a message to read it."
                                </div>
                            }.into_view();
                        };
                        view! {
                            <div class="bg-gray-800 rounded-xl p-6 border border-gray-700 space-y-4">
                                <div>
                                    <h2 class="text-xl font-bold">{message.name.clone()}</h2>
                                    <p class="text-gray-400 text-sm">
                                        {message.email.clone()}
                                        {message.company.clone().map(|c| format!(" · {}", c))}
                                    </p>
                                </div>
                                <p class="text-gray-300 whitespace-pre-line">
                                    {message.message.clone()}
                                </p>
                                {message.admin_notes.clone().map(|admin_notes| view! {
                                    <div class="bg-gray-700/50 rounded-lg p-3 text-sm">
                                        <span class="text-gray-400">"Notes: "</span>
                                        {admin_notes}
                                    </div>
                                })}

                                <div class="border-t border-gray-700 pt-4 space-y-3">
                                    <textarea
                                        rows=2
                                        placeholder="Add internal notes..."
                                        prop:value=move || notes.get()
                                        on:input=move |ev| set_notes.set(event_target_value(&ev))
                                        class="w-full bg-gray-700 rounded-lg px-3 py-2 text-sm
                                               border border-gray-600 focus:border-primary-500
                                               focus:outline-none"
                                    />
                                    <div class="flex space-x-2">
                                        <button
                                            on:click=save_notes
                                            disabled=move || {
                                                acting.get() || notes.get().trim().is_empty()
                                            }
                                            class="flex-1 py-2 bg-gray-700 hover:bg-gray-600
                                                   disabled:bg-gray-800 rounded-lg text-sm
                                                   font-medium transition-colors"
                                        >
                                            "Save Notes"
                                        </button>
                                        <button
                                            on:click=resolve
                                            disabled=move || acting.get()
                                            class="flex-1 py-2 bg-green-700 hover:bg-green-600
                                                   disabled:bg-gray-700 rounded-lg text-sm
                                                   font-medium transition-colors"
                                        >
                                            "Mark Resolved"
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
