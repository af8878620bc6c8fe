//! Organization Signup Page
//!
//! Three-step questionnaire: organization details, contact information, then
//! sectors/funding plus terms. Each step validates locally before advancing;
//! server field errors merge into the same inline-error map on submit.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::registrations::{validate_step, OrganizationForm};
use crate::api::ApiError;
use crate::components::FieldError;
use crate::state::use_notices;

const ORGANIZATION_TYPES: &[(&str, &str)] = &[
    ("", "Select type..."),
    ("startup", "Startup"),
    ("hub", "Innovation Hub"),
    ("incubator", "Incubator"),
    ("accelerator", "Accelerator"),
    ("investor", "Investor"),
    ("university", "University"),
    ("other", "Other"),
];

const EMPLOYEE_COUNTS: &[(&str, &str)] = &[
    ("", "Select range..."),
    ("1-10", "1-10"),
    ("11-50", "11-50"),
    ("51-200", "51-200"),
    ("201-500", "201-500"),
    ("500+", "500+"),
];

const FUNDING_STAGES: &[(&str, &str)] = &[
    ("", "Select stage..."),
    ("pre-seed", "Pre-seed"),
    ("seed", "Seed"),
    ("series-a", "Series A"),
    ("series-b", "Series B"),
    ("series-c-plus", "Series C+"),
    ("bootstrapped", "Bootstrapped"),
    ("not-applicable", "Not applicable"),
];

const SECTORS: &[&str] = &[
    "Fintech",
    "Agritech",
    "Healthtech",
    "Edtech",
    "E-commerce",
    "Logistics",
    "Energy",
    "Manufacturing",
    "Tourism",
    "Creative",
];

#[component]
pub fn OrganizationSignup() -> impl IntoView {
    let notices = use_notices();

    let form = create_rw_signal(OrganizationForm::default());
    let (step, set_step) = create_signal(1u8);
    let (errors, set_errors) = create_signal(Vec::<(String, String)>::new());
    let (submitting, set_submitting) = create_signal(false);
    let (submitted, set_submitted) = create_signal(false);

    let field_error = move |field: &'static str| {
        Signal::derive(move || {
            errors.with(|errs| {
                errs.iter()
                    .find(|(f, _)| f == field)
                    .map(|(_, msg)| msg.clone())
            })
        })
    };

    let next_step = move |_| {
        let step_errors = form.with_untracked(|f| validate_step(f, step.get_untracked()));
        if step_errors.is_empty() {
            set_errors.set(Vec::new());
            set_step.update(|s| *s = (*s + 1).min(3));
        } else {
            set_errors.set(step_errors);
        }
    };
    let prev_step = move |_| {
        set_errors.set(Vec::new());
        set_step.update(|s| *s = s.saturating_sub(1).max(1));
    };

    let submit = move |_| {
        let current = form.get_untracked();
        let step_errors = validate_step(&current, 3);
        if !step_errors.is_empty() {
            set_errors.set(step_errors);
            return;
        }
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);
        spawn_local(async move {
            match api::registrations::signup(&current).await {
                Ok(_) => {
                    set_errors.set(Vec::new());
                    set_submitted.set(true);
                    notices.show_success("Registration submitted");
                }
                Err(ApiError::Validation { fields, .. }) => {
                    notices.show_error("Please correct the highlighted fields");
                    // Server fields may belong to an earlier step
                    if fields.iter().any(|(f, _)| {
                        matches!(
                            f.as_str(),
                            "organization_type"
                                | "organization_name"
                                | "description"
                                | "headquarters"
                        )
                    }) {
                        set_step.set(1);
                    } else if fields.iter().any(|(f, _)| {
                        matches!(
                            f.as_str(),
                            "first_name" | "last_name" | "email" | "position"
                        )
                    }) {
                        set_step.set(2);
                    }
                    set_errors.set(fields);
                }
                Err(e) => {
                    notices.show_error(&e.to_string());
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
                        <div class="text-5xl mb-4">"🎉"</div>
                        <h1 class="text-2xl font-bold mb-2">"You're In the Queue"</h1>
                        <p class="text-gray-400 mb-6">
                            "Thanks for registering! Our team reviews every submission; \
                             you'll hear from us at the contact email you provided."
                        </p>
                        <A
                            href="/"
                            class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg
                                   font-medium transition-colors"
                        >
                            "Back to Home"
                        </A>
                    </div>
                }.into_view();
            }
            view! {
                <div class="max-w-2xl mx-auto space-y-6">
                    <div class="text-center">
                        <h1 class="text-3xl font-bold">"Join the Directory"</h1>
                        <p class="text-gray-400 mt-1">
                            "Register your organization in three quick steps"
                        </p>
                    </div>

                    <StepIndicator step=step />

                    <div class="bg-gray-800 rounded-xl p-6 space-y-4">
                        {move || match step.get() {
                            1 => view! {
                                <StepOrganization form=form field_error=field_error />
                            }.into_view(),
                            2 => view! {
                                <StepContact form=form field_error=field_error />
                            }.into_view(),
                            _ => view! {
                                <StepAdditional form=form field_error=field_error />
                            }.into_view(),
                        }}

                        <div class="flex items-center justify-between pt-4">
                            {move || (step.get() > 1).then(|| view! {
                                <button
                                    on:click=prev_step
                                    class="px-6 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                                           font-medium transition-colors"
                                >
                                    "Back"
                                </button>
                            })}
                            <div class="flex-1" />
                            {move || {
                                if step.get() < 3 {
                                    view! {
                                        <button
                                            on:click=next_step
                                            class="px-6 py-2 bg-primary-600 hover:bg-primary-700
                                                   rounded-lg font-medium transition-colors"
                                        >
                                            "Continue"
                                        </button>
                                    }.into_view()
                                } else {
                                    view! {
                                        <button
                                            on:click=submit
                                            disabled=move || submitting.get()
                                            class="px-6 py-2 bg-primary-600 hover:bg-primary-700
                                                   disabled:bg-gray-700 rounded-lg font-medium
                                                   transition-colors"
                                        >
                                            {move || {
                                                if submitting.get() {
                                                    "Submitting..."
                                                } else {
                                                    "Submit Registration"
                                                }
                                            }}
                                        </button>
                                    }.into_view()
                                }
                            }}
                        </div>
                    </div>
                </div>
            }.into_view()
        }}
    }
}

#[component]
fn StepIndicator(#[prop(into)] step: Signal<u8>) -> impl IntoView {
    let labels = ["Organization", "Contact", "Details"];
    view! {
        <div class="flex items-center justify-center space-x-2">
            {labels.iter().enumerate().map(|(i, label)| {
                let number = (i + 1) as u8;
                view! {
                    <div class="flex items-center space-x-2">
                        <div class=move || {
                            if step.get() >= number {
                                "w-8 h-8 rounded-full bg-primary-600 flex items-center \
                                 justify-center text-sm font-bold"
                            } else {
                                "w-8 h-8 rounded-full bg-gray-700 flex items-center \
                                 justify-center text-sm text-gray-400"
                            }
                        }>
                            {number.to_string()}
                        </div>
                        <span class="text-sm text-gray-400 hidden md:inline">{*label}</span>
                        {(number < 3).then(|| view! {
                            <div class="w-8 h-px bg-gray-700" />
                        })}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

/// Input bound to one field of the shared form signal
#[component]
fn FormInput<G, S>(
    label: &'static str,
    form: RwSignal<OrganizationForm>,
    getter: G,
    setter: S,
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = false)]
    required: bool,
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView
where
    G: Fn(&OrganizationForm) -> String + Copy + 'static,
    S: Fn(&mut OrganizationForm, String) + Copy + 'static,
{
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">
                {label}
                {required.then(|| view! { <span class="text-red-400">" *"</span> })}
            </label>
            <input
                type=input_type
                prop:value=move || form.with(|f| getter(f))
                on:input=move |ev| form.update(|f| setter(f, event_target_value(&ev)))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
            {error.map(|e| view! { <FieldError error=e /> })}
        </div>
    }
}

#[component]
fn FormSelect<G, S>(
    label: &'static str,
    form: RwSignal<OrganizationForm>,
    getter: G,
    setter: S,
    options: &'static [(&'static str, &'static str)],
    #[prop(default = false)]
    required: bool,
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView
where
    G: Fn(&OrganizationForm) -> String + Copy + 'static,
    S: Fn(&mut OrganizationForm, String) + Copy + 'static,
{
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">
                {label}
                {required.then(|| view! { <span class="text-red-400">" *"</span> })}
            </label>
            <select
                prop:value=move || form.with(|f| getter(f))
                on:change=move |ev| form.update(|f| setter(f, event_target_value(&ev)))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            >
                {options.iter().map(|(value, text)| view! {
                    <option value=*value>{*text}</option>
                }).collect_view()}
            </select>
            {error.map(|e| view! { <FieldError error=e /> })}
        </div>
    }
}

#[component]
fn StepOrganization<E>(form: RwSignal<OrganizationForm>, field_error: E) -> impl IntoView
where
    E: Fn(&'static str) -> Signal<Option<String>> + Copy + 'static,
{
    view! {
        <div class="space-y-4">
            <h2 class="text-lg font-semibold">"Organization Details"</h2>
            <FormSelect
                label="Organization Type"
                form=form
                getter=|f: &OrganizationForm| f.organization_type.clone()
                setter=|f: &mut OrganizationForm, v| f.organization_type = v
                options=ORGANIZATION_TYPES
                required=true
                error=field_error("organization_type")
            />
            <FormInput
                label="Organization Name"
                form=form
                getter=|f: &OrganizationForm| f.organization_name.clone()
                setter=|f: &mut OrganizationForm, v| f.organization_name = v
                required=true
                error=field_error("organization_name")
            />
            <div>
                <label class="block text-sm text-gray-400 mb-2">
                    "Description" <span class="text-red-400">" *"</span>
                </label>
                <textarea
                    rows=4
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| {
                        form.update(|f| f.description = event_target_value(&ev))
                    }
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <FieldError error=field_error("description") />
            </div>
            <div class="grid grid-cols-2 gap-4">
                <FormInput
                    label="Founded Year"
                    form=form
                    getter=|f: &OrganizationForm| f.founded_year.clone()
                    setter=|f: &mut OrganizationForm, v| f.founded_year = v
                    input_type="number"
                    error=field_error("founded_year")
                />
                <FormSelect
                    label="Employee Count"
                    form=form
                    getter=|f: &OrganizationForm| f.employee_count.clone()
                    setter=|f: &mut OrganizationForm, v| f.employee_count = v
                    options=EMPLOYEE_COUNTS
                    error=field_error("employee_count")
                />
            </div>
            <div class="grid grid-cols-2 gap-4">
                <FormInput
                    label="Headquarters"
                    form=form
                    getter=|f: &OrganizationForm| f.headquarters.clone()
                    setter=|f: &mut OrganizationForm, v| f.headquarters = v
                    required=true
                    error=field_error("headquarters")
                />
                <FormInput
                    label="Country"
                    form=form
                    getter=|f: &OrganizationForm| f.country.clone()
                    setter=|f: &mut OrganizationForm, v| f.country = v
                    error=field_error("country")
                />
            </div>
            <FormInput
                label="Website"
                form=form
                getter=|f: &OrganizationForm| f.website.clone()
                setter=|f: &mut OrganizationForm, v| f.website = v
                input_type="url"
                error=field_error("website")
            />
        </div>
    }
}

#[component]
fn StepContact<E>(form: RwSignal<OrganizationForm>, field_error: E) -> impl IntoView
where
    E: Fn(&'static str) -> Signal<Option<String>> + Copy + 'static,
{
    view! {
        <div class="space-y-4">
            <h2 class="text-lg font-semibold">"Contact Information"</h2>
            <div class="grid grid-cols-2 gap-4">
                <FormInput
                    label="First Name"
                    form=form
                    getter=|f: &OrganizationForm| f.first_name.clone()
                    setter=|f: &mut OrganizationForm, v| f.first_name = v
                    required=true
                    error=field_error("first_name")
                />
                <FormInput
                    label="Last Name"
                    form=form
                    getter=|f: &OrganizationForm| f.last_name.clone()
                    setter=|f: &mut OrganizationForm, v| f.last_name = v
                    required=true
                    error=field_error("last_name")
                />
            </div>
            <FormInput
                label="Email"
                form=form
                getter=|f: &OrganizationForm| f.email.clone()
                setter=|f: &mut OrganizationForm, v| f.email = v
                input_type="email"
                required=true
                error=field_error("email")
            />
            <div class="grid grid-cols-2 gap-4">
                <FormInput
                    label="Phone"
                    form=form
                    getter=|f: &OrganizationForm| f.phone.clone()
                    setter=|f: &mut OrganizationForm, v| f.phone = v
                    input_type="tel"
                    error=field_error("phone")
                />
                <FormInput
                    label="Position"
                    form=form
                    getter=|f: &OrganizationForm| f.position.clone()
                    setter=|f: &mut OrganizationForm, v| f.position = v
                    required=true
                    error=field_error("position")
                />
            </div>
            <FormInput
                label="LinkedIn Profile"
                form=form
                getter=|f: &OrganizationForm| f.linkedin_profile.clone()
                setter=|f: &mut OrganizationForm, v| f.linkedin_profile = v
                input_type="url"
                error=field_error("linkedin_profile")
            />
        </div>
    }
}

#[component]
fn StepAdditional<E>(form: RwSignal<OrganizationForm>, field_error: E) -> impl IntoView
where
    E: Fn(&'static str) -> Signal<Option<String>> + Copy + 'static,
{
    view! {
        <div class="space-y-4">
            <h2 class="text-lg font-semibold">"Additional Information"</h2>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Sectors"</label>
                <div class="grid grid-cols-2 md:grid-cols-3 gap-1">
                    {SECTORS.iter().map(|sector| {
                        let name = sector.to_string();
                        let for_checked = name.clone();
                        let for_toggle = name.clone();
                        view! {
                            <label class="flex items-center space-x-2 text-sm text-gray-300
                                          cursor-pointer py-0.5">
                                <input
                                    type="checkbox"
                                    checked=move || {
                                        form.with(|f| f.sectors.contains(&for_checked))
                                    }
                                    on:change=move |_| {
                                        let sector = for_toggle.clone();
                                        form.update(|f| {
                                            if let Some(idx) =
                                                f.sectors.iter().position(|s| *s == sector)
                                            {
                                                f.sectors.remove(idx);
                                            } else {
                                                f.sectors.push(sector);
                                            }
                                        });
                                    }
                                    class="rounded border-gray-600 bg-gray-700"
                                />
                                <span>{name}</span>
                            </label>
                        }
                    }).collect_view()}
                </div>
            </div>

            <div class="grid grid-cols-2 gap-4">
                <FormSelect
                    label="Funding Stage"
                    form=form
                    getter=|f: &OrganizationForm| f.funding_stage.clone()
                    setter=|f: &mut OrganizationForm, v| f.funding_stage = v
                    options=FUNDING_STAGES
                    error=field_error("funding_stage")
                />
                <FormInput
                    label="Total Funding (USD)"
                    form=form
                    getter=|f: &OrganizationForm| f.total_funding.clone()
                    setter=|f: &mut OrganizationForm, v| f.total_funding = v
                    input_type="number"
                    error=field_error("total_funding")
                />
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Key Achievements"</label>
                <textarea
                    rows=3
                    prop:value=move || form.with(|f| f.key_achievements.clone())
                    on:input=move |ev| {
                        form.update(|f| f.key_achievements = event_target_value(&ev))
                    }
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div class="space-y-2 pt-2">
                <label class="flex items-center space-x-2 text-sm text-gray-300 cursor-pointer">
                    <input
                        type="checkbox"
                        checked=move || form.with(|f| f.agree_to_terms)
                        on:change=move |_| form.update(|f| f.agree_to_terms = !f.agree_to_terms)
                        class="rounded border-gray-600 bg-gray-700"
                    />
                    <span>
                        "I agree to the terms and conditions"
                        <span class="text-red-400">" *"</span>
                    </span>
                </label>
                <FieldError error=field_error("agree_to_terms") />
                <label class="flex items-center space-x-2 text-sm text-gray-300 cursor-pointer">
                    <input
                        type="checkbox"
                        checked=move || form.with(|f| f.subscribe_newsletter)
                        on:change=move |_| {
                            form.update(|f| f.subscribe_newsletter = !f.subscribe_newsletter)
                        }
                        class="rounded border-gray-600 bg-gray-700"
                    />
                    <span>"Send me ecosystem news and updates"</span>
                </label>
            </div>
        </div>
    }
}
