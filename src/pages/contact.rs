//! Contact Page

use leptos::*;

use crate::api;
use crate::api::contacts::ContactForm;
use crate::api::ApiError;
use crate::components::{TextArea, TextField};
use crate::state::use_notices;

#[component]
pub fn Contact() -> impl IntoView {
    let notices = use_notices();

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let company = create_rw_signal(String::new());
    let message = create_rw_signal(String::new());

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
        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            company: company.get_untracked(),
            message: message.get_untracked(),
        };
        set_submitting.set(true);
        spawn_local(async move {
            match api::contacts::submit(&form).await {
                Ok(_) => {
                    set_api_error.set(None);
                    set_submitted.set(true);
                    notices.show_success("Message sent");
                }
                Err(e) => {
                    notices.show_error(&e.to_string());
                    set_api_error.set(Some(e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        {move || {
            if submitted.get() {
                return view! {
                    <div class="max-w-xl mx-auto text-center py-16">
                        <div class="text-5xl mb-4">"📬"</div>
                        <h1 class="text-2xl font-bold mb-2">"Message Sent"</h1>
                        <p class="text-gray-400">
                            "Thanks for reaching out. We'll get back to you soon."
                        </p>
                    </div>
                }.into_view();
            }
            view! {
                <div class="max-w-xl mx-auto space-y-6">
                    <div>
                        <h1 class="text-3xl font-bold">"Get in Touch"</h1>
                        <p class="text-gray-400 mt-1">
                            "Questions, corrections, or partnership ideas — we read everything."
                        </p>
                    </div>
                    <form on:submit=submit class="bg-gray-800 rounded-xl p-6 space-y-4">
                        <TextField
                            label="Name"
                            value=name
                            required=true
                            error=field_error("name")
                        />
                        <TextField
                            label="Email"
                            value=email
                            input_type="email"
                            required=true
                            error=field_error("email")
                        />
                        <TextField
                            label="Company"
                            value=company
                            placeholder="Optional"
                            error=field_error("company")
                        />
                        <TextArea
                            label="Message"
                            value=message
                            required=true
                            rows=6
                            error=field_error("message")
                        />
                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="w-full py-3 bg-primary-600 hover:bg-primary-700
                                   disabled:bg-gray-700 rounded-lg font-medium transition-colors"
                        >
                            {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                        </button>
                    </form>
                </div>
            }.into_view()
        }}
    }
}
