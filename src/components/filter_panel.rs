//! Filter Panel Components
//!
//! Checkbox groups over a draft `FilterQuery`; the draft reaches the URL only
//! when the page's Apply button fires.

use leptos::*;

use crate::state::FilterQuery;

/// One categorical filter group as a set of checkboxes
#[component]
pub fn FilterGroup(
    title: &'static str,
    /// Filter key this group writes into the query
    key: &'static str,
    /// `(value, label)` pairs
    #[prop(into)]
    options: MaybeSignal<Vec<(String, String)>>,
    draft: RwSignal<FilterQuery>,
) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-sm font-semibold text-gray-300 mb-2">{title}</h3>
            <div class="space-y-1 max-h-48 overflow-y-auto">
                {move || {
                    options.get().into_iter().map(|(value, label)| {
                        let toggle_value = value.clone();
                        let checked = draft.with(|d| d.is_selected(key, &value));
                        view! {
                            <label class="flex items-center space-x-2 text-sm text-gray-400
                                          hover:text-white cursor-pointer py-0.5">
                                <input
                                    type="checkbox"
                                    checked=checked
                                    on:change=move |_| {
                                        draft.update(|d| d.toggle(key, &toggle_value));
                                    }
                                    class="rounded border-gray-600 bg-gray-700"
                                />
                                <span>{label}</span>
                            </label>
                        }
                    }).collect_view()
                }}
            </div>
        </div>
    }
}

/// Search box + Apply/Reset row shared by the list pages
#[component]
pub fn SearchBar(
    draft: RwSignal<FilterQuery>,
    #[prop(into)]
    on_apply: Callback<()>,
    #[prop(optional)]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <form
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                on_apply.call(());
            }
            class="flex space-x-2"
        >
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || draft.with(|d| d.search.clone())
                on:input=move |ev| draft.update(|d| d.set_search(&event_target_value(&ev)))
                class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
            <button
                type="submit"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg
                       font-medium transition-colors"
            >
                "Search"
            </button>
            <button
                type="button"
                on:click=move |_| {
                    draft.update(|d| d.clear());
                    on_apply.call(());
                }
                class="px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg
                       font-medium transition-colors"
            >
                "Reset"
            </button>
        </form>
    }
}
