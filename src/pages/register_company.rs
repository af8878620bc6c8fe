//! Company Registration Page
//!
//! Two stages: an intro panel explaining the review process, then the full
//! registration form. Server-side field errors render inline next to the
//! offending inputs.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::companies::CompanyForm;
use crate::api::models::Industry;
use crate::api::ApiError;
use crate::components::{SelectField, TextArea, TextField};
use crate::state::use_notices;

const COMPANY_TYPE_OPTIONS: &[(&str, &str)] = &[
    ("", "Select type..."),
    ("Startup", "Startup"),
    ("SME", "Small & Medium Enterprise"),
    ("Corporation", "Corporation"),
    ("Non-profit", "Non-profit"),
    ("Government", "Government"),
];

const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("Operating", "Operating"),
    ("Stealth", "Stealth Mode"),
    ("Pre-launch", "Pre-launch"),
    ("Acquired", "Acquired"),
    ("Closed", "Closed"),
];

const EMPLOYEE_OPTIONS: &[(&str, &str)] = &[
    ("", "Select range..."),
    ("1-10", "1-10 employees"),
    ("11-50", "11-50 employees"),
    ("51-200", "51-200 employees"),
    ("201-500", "201-500 employees"),
    ("501-1000", "501-1000 employees"),
    ("1001-5000", "1001-5000 employees"),
    ("5000+", "5000+ employees"),
];

#[component]
pub fn RegisterCompany() -> impl IntoView {
    let notices = use_notices();

    let (started, set_started) = create_signal(false);
    let (submitted, set_submitted) = create_signal(false);
    let (submitting, set_submitting) = create_signal(false);
    let (api_error, set_api_error) = create_signal(None::<ApiError>);

    // Form fields
    let name = create_rw_signal(String::new());
    let short_description = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let website = create_rw_signal(String::new());
    let founded_date = create_rw_signal(String::new());
    let company_type = create_rw_signal(String::new());
    let status = create_rw_signal("Operating".to_string());
    let hq_country = create_rw_signal(String::new());
    let hq_city = create_rw_signal(String::new());
    let hq_address = create_rw_signal(String::new());
    let employee_count_range = create_rw_signal(String::new());
    let total_funding = create_rw_signal(String::new());
    let contact_email = create_rw_signal(String::new());
    let contact_phone = create_rw_signal(String::new());
    let linkedin_url = create_rw_signal(String::new());
    let twitter_url = create_rw_signal(String::new());
    let tags = create_rw_signal(String::new());
    let industries = create_rw_signal(Vec::<u64>::new());

    // Industry picker options
    let (industry_options, set_industry_options) = create_signal(Vec::<Industry>::new());
    create_effect(move |_| {
        spawn_local(async move {
            match api::industries::all().await {
                Ok(items) => set_industry_options.set(items),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load industries: {}", e).into(),
                    );
                }
            }
        });
    });

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
        let form = CompanyForm {
            name: name.get_untracked(),
            short_description: short_description.get_untracked(),
            description: description.get_untracked(),
            website: website.get_untracked(),
            founded_date: founded_date.get_untracked(),
            company_type: company_type.get_untracked(),
            status: status.get_untracked(),
            hq_country: hq_country.get_untracked(),
            hq_city: hq_city.get_untracked(),
            hq_address: hq_address.get_untracked(),
            employee_count_range: employee_count_range.get_untracked(),
            total_funding_raised_usd: total_funding.get_untracked(),
            contact_email: contact_email.get_untracked(),
            contact_phone: contact_phone.get_untracked(),
            linkedin_url: linkedin_url.get_untracked(),
            twitter_url: twitter_url.get_untracked(),
            industries: industries.get_untracked(),
            tags: tags.get_untracked(),
            ..CompanyForm::default()
        };
        set_submitting.set(true);
        spawn_local(async move {
            match api::companies::create(&api::companies::registration_payload(&form)).await {
                Ok(_) => {
                    set_api_error.set(None);
                    set_submitted.set(true);
                    notices.show_success("Company registration submitted");
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
                        <div class="text-5xl mb-4">"🎉"</div>
                        <h1 class="text-2xl font-bold mb-2">"Registration Received"</h1>
                        <p class="text-gray-400 mb-6">
                            "Your company is now in the review queue. It will appear in the \
                             directory once approved."
                        </p>
                        <A
                            href="/companies"
                            class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg
                                   font-medium transition-colors"
                        >
                            "Browse Companies"
                        </A>
                    </div>
                }.into_view();
            }
            if !started.get() {
                return view! {
                    <div class="max-w-2xl mx-auto space-y-6 py-8">
                        <h1 class="text-3xl font-bold text-center">"Add Your Company"</h1>
                        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700 space-y-4">
                            <p class="text-gray-300">
                                "Register your company to be featured in the ecosystem \
                                 directory. Submissions are reviewed before going live."
                            </p>
                            <ul class="text-gray-400 text-sm space-y-2 list-disc list-inside">
                                <li>"Basic details take about five minutes"</li>
                                <li>"Name, description, location, and a contact email are required"</li>
                                <li>"You can add funding and team details later"</li>
                            </ul>
                            <button
                                on:click=move |_| set_started.set(true)
                                class="w-full py-3 bg-primary-600 hover:bg-primary-700 rounded-lg
                                       font-medium transition-colors"
                            >
                                "Start Registration"
                            </button>
                        </div>
                    </div>
                }.into_view();
            }
            view! {
                <div class="max-w-2xl mx-auto space-y-6">
                    <h1 class="text-3xl font-bold">"Company Registration"</h1>
                    <form on:submit=submit class="bg-gray-800 rounded-xl p-6 space-y-6">
                        <section class="space-y-4">
                            <h2 class="text-lg font-semibold">"Basics"</h2>
                            <TextField
                                label="Company Name"
                                value=name
                                required=true
                                error=field_error("name")
                            />
                            <TextField
                                label="One-line Description"
                                value=short_description
                                required=true
                                placeholder="What does the company do?"
                                error=field_error("short_description")
                            />
                            <TextArea
                                label="Full Description"
                                value=description
                                error=field_error("description")
                            />
                            <div class="grid grid-cols-2 gap-4">
                                <SelectField
                                    label="Company Type"
                                    value=company_type
                                    options=COMPANY_TYPE_OPTIONS.to_vec()
                                    error=field_error("company_type")
                                />
                                <SelectField
                                    label="Status"
                                    value=status
                                    options=STATUS_OPTIONS.to_vec()
                                    error=field_error("status")
                                />
                            </div>
                            <div class="grid grid-cols-2 gap-4">
                                <TextField
                                    label="Founded Date"
                                    value=founded_date
                                    input_type="date"
                                    error=field_error("founded_date")
                                />
                                <SelectField
                                    label="Team Size"
                                    value=employee_count_range
                                    options=EMPLOYEE_OPTIONS.to_vec()
                                    error=field_error("employee_count_range")
                                />
                            </div>
                        </section>

                        <section class="space-y-4">
                            <h2 class="text-lg font-semibold">"Location & Contact"</h2>
                            <div class="grid grid-cols-2 gap-4">
                                <TextField
                                    label="Country"
                                    value=hq_country
                                    required=true
                                    error=field_error("hq_country")
                                />
                                <TextField
                                    label="City"
                                    value=hq_city
                                    required=true
                                    error=field_error("hq_city")
                                />
                            </div>
                            <TextField
                                label="Address"
                                value=hq_address
                                error=field_error("hq_address")
                            />
                            <div class="grid grid-cols-2 gap-4">
                                <TextField
                                    label="Contact Email"
                                    value=contact_email
                                    input_type="email"
                                    required=true
                                    error=field_error("contact_email")
                                />
                                <TextField
                                    label="Phone"
                                    value=contact_phone
                                    input_type="tel"
                                    error=field_error("contact_phone")
                                />
                            </div>
                            <div class="grid grid-cols-2 gap-4">
                                <TextField
                                    label="Website"
                                    value=website
                                    input_type="url"
                                    placeholder="https://"
                                    error=field_error("website")
                                />
                                <TextField
                                    label="LinkedIn"
                                    value=linkedin_url
                                    input_type="url"
                                    error=field_error("linkedin_url")
                                />
                            </div>
                            <TextField
                                label="Twitter / X"
                                value=twitter_url
                                input_type="url"
                                error=field_error("twitter_url")
                            />
                        </section>

                        <section class="space-y-4">
                            <h2 class="text-lg font-semibold">"Classification"</h2>
                            <div>
                                <label class="block text-sm text-gray-400 mb-2">"Industries"</label>
                                <div class="grid grid-cols-2 md:grid-cols-3 gap-1 max-h-48
                                            overflow-y-auto bg-gray-700/50 rounded-lg p-3">
                                    {move || industry_options.get().into_iter().map(|industry| {
                                        let id = industry.id;
                                        view! {
                                            <label class="flex items-center space-x-2 text-sm
                                                          text-gray-300 cursor-pointer py-0.5">
                                                <input
                                                    type="checkbox"
                                                    checked=move || {
                                                        industries.with(|ids| ids.contains(&id))
                                                    }
                                                    on:change=move |_| {
                                                        industries.update(|ids| {
                                                            if let Some(idx) =
                                                                ids.iter().position(|&i| i == id)
                                                            {
                                                                ids.remove(idx);
                                                            } else {
                                                                ids.push(id);
                                                            }
                                                        });
                                                    }
                                                    class="rounded border-gray-600 bg-gray-700"
                                                />
                                                <span>{industry.name}</span>
                                            </label>
                                        }
                                    }).collect_view()}
                                </div>
                            </div>
                            <TextField
                                label="Tags"
                                value=tags
                                placeholder="fintech, mobile money, payments"
                                error=field_error("tags")
                            />
                            <TextField
                                label="Total Funding Raised (USD)"
                                value=total_funding
                                input_type="number"
                                placeholder="e.g. 1500000"
                                error=field_error("total_funding_raised_usd")
                            />
                        </section>

                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="w-full py-3 bg-primary-600 hover:bg-primary-700
                                   disabled:bg-gray-700 rounded-lg font-medium transition-colors"
                        >
                            {move || {
                                if submitting.get() { "Submitting..." } else { "Submit for Review" }
                            }}
                        </button>
                    </form>
                </div>
            }.into_view()
        }}
    }
}
