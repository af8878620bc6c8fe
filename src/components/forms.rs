//! Form Field Components
//!
//! Labeled inputs with inline field errors, shared by the registration and
//! admin forms.

use leptos::*;

/// Text input with label and optional inline error
#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(optional)]
    placeholder: &'static str,
    #[prop(default = false)]
    required: bool,
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">
                {label}
                {if required { Some(view! { <span class="text-red-400">" *"</span> }) } else { None }}
            </label>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
            {error.map(|e| view! { <FieldError error=e /> })}
        </div>
    }
}

/// Multi-line input with label and optional inline error
#[component]
pub fn TextArea(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)]
    placeholder: &'static str,
    #[prop(default = false)]
    required: bool,
    #[prop(default = 4)]
    rows: u32,
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">
                {label}
                {if required { Some(view! { <span class="text-red-400">" *"</span> }) } else { None }}
            </label>
            <textarea
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
            {error.map(|e| view! { <FieldError error=e /> })}
        </div>
    }
}

/// Select with label, `(value, label)` options, and optional inline error
#[component]
pub fn SelectField(
    label: &'static str,
    value: RwSignal<String>,
    options: Vec<(&'static str, &'static str)>,
    #[prop(default = false)]
    required: bool,
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">
                {label}
                {if required { Some(view! { <span class="text-red-400">" *"</span> }) } else { None }}
            </label>
            <select
                on:change=move |ev| value.set(event_target_value(&ev))
                prop:value=move || value.get()
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            >
                {options.into_iter().map(|(option_value, option_label)| view! {
                    <option value=option_value>{option_label}</option>
                }).collect_view()}
            </select>
            {error.map(|e| view! { <FieldError error=e /> })}
        </div>
    }
}

/// Inline field error text; renders nothing when there is no error
#[component]
pub fn FieldError(
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        {move || {
            error
                .and_then(|e| e.get())
                .map(|msg| view! { <p class="mt-1 text-sm text-red-400">{msg}</p> })
        }}
    }
}
