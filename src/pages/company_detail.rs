//! Company Detail Page

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::models::Company;
use crate::components::{format_usd, LoadError, Loading};

/// Full company profile, keyed by slug
#[component]
pub fn CompanyDetail() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.with(|p| p.get("slug").cloned().unwrap_or_default());

    let (company, set_company) = create_signal(None::<Company>);
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (reload, set_reload) = create_signal(0u32);

    create_effect(move |_| {
        reload.get();
        let slug = slug();
        if slug.is_empty() {
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            match api::companies::get(&slug).await {
                Ok(data) => {
                    set_company.set(Some(data));
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load company: {}", e).into());
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        {move || {
            if loading.get() {
                return view! { <Loading /> }.into_view();
            }
            if let Some(message) = error.get() {
                return view! {
                    <LoadError
                        message=message
                        on_retry=move |_| set_reload.update(|n| *n += 1)
                    />
                }.into_view();
            }
            let Some(company) = company.get() else {
                return ().into_view();
            };
            view! { <CompanyProfile company=company /> }.into_view()
        }}
    }
}

#[component]
fn CompanyProfile(company: Company) -> impl IntoView {
    let location = [company.hq_city.clone(), company.hq_country.clone()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");
    let tags: Vec<String> = company
        .tags
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    view! {
        <div class="space-y-8">
            <A href="/companies" class="text-primary-400 hover:text-primary-300 text-sm">
                "← Back to companies"
            </A>

            // Header
            <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                <div class="flex items-start justify-between">
                    <div>
                        <h1 class="text-3xl font-bold">{company.name.clone()}</h1>
                        <p class="text-gray-400 mt-2">
                            {company.short_description.clone().unwrap_or_default()}
                        </p>
                        <div class="flex flex-wrap gap-2 mt-3">
                            {company.industries.iter().map(|industry| view! {
                                <span class="bg-gray-700 text-gray-300 text-xs px-2 py-0.5 rounded-full">
                                    {industry.name.clone()}
                                </span>
                            }).collect_view()}
                        </div>
                    </div>
                    {company.website.clone().map(|website| view! {
                        <a
                            href=website
                            target="_blank"
                            rel="noopener"
                            class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                                   text-sm font-medium transition-colors"
                        >
                            "Visit Website"
                        </a>
                    })}
                </div>
            </div>

            // Facts grid
            <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-4">
                <Fact label="Status" value=company.status.clone().unwrap_or_else(|| "—".into()) />
                <Fact label="Type" value=company.company_type.clone().unwrap_or_else(|| "—".into()) />
                <Fact
                    label="Location"
                    value=if location.is_empty() { "—".to_string() } else { location }
                />
                <Fact
                    label="Team Size"
                    value=company.employee_count_range.clone().unwrap_or_else(|| "—".into())
                />
                <Fact
                    label="Founded"
                    value=company.founded_date.clone().unwrap_or_else(|| "—".into())
                />
                <Fact
                    label="Total Funding"
                    value=company
                        .total_funding_display
                        .clone()
                        .or_else(|| company.total_funding_raised_usd.map(format_usd))
                        .unwrap_or_else(|| "—".into())
                />
                <Fact
                    label="Contact"
                    value=company.contact_email.clone().unwrap_or_else(|| "—".into())
                />
                <Fact label="Phone" value=company.contact_phone.clone().unwrap_or_else(|| "—".into()) />
            </div>

            // About
            {company.description.clone().map(|description| view! {
                <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                    <h2 class="text-xl font-bold mb-3">"About"</h2>
                    <p class="text-gray-300 whitespace-pre-line">{description}</p>
                </div>
            })}

            // Funding history
            {(!company.funding_rounds.is_empty()).then(|| view! {
                <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                    <h2 class="text-xl font-bold mb-4">"Funding History"</h2>
                    <div class="space-y-3">
                        {company.funding_rounds.iter().map(|round| view! {
                            <div class="flex items-center justify-between bg-gray-700/50 rounded-lg p-3">
                                <div>
                                    <span class="font-medium">
                                        {round.round_type.clone().unwrap_or_else(|| "Round".into())}
                                    </span>
                                    <span class="text-gray-400 text-sm ml-3">
                                        {round.announced_date.clone().unwrap_or_default()}
                                    </span>
                                </div>
                                <span class="text-gray-300">
                                    {round
                                        .money_raised_display
                                        .clone()
                                        .or_else(|| round.money_raised_usd.map(format_usd))
                                        .unwrap_or_else(|| "Undisclosed".into())}
                                </span>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            })}

            // Team
            {(!company.people.is_empty()).then(|| view! {
                <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                    <h2 class="text-xl font-bold mb-4">"Team"</h2>
                    <div class="grid md:grid-cols-3 gap-4">
                        {company.people.iter().map(|person| view! {
                            <div class="bg-gray-700/50 rounded-lg p-4">
                                <div class="font-medium">{person.name.clone()}</div>
                                <div class="text-gray-400 text-sm">
                                    {person.title.clone().unwrap_or_default()}
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            })}

            // Tags
            {(!tags.is_empty()).then(|| view! {
                <div class="flex flex-wrap gap-2">
                    {tags.iter().map(|tag| view! {
                        <span class="bg-gray-800 border border-gray-700 text-gray-400
                                     text-sm px-3 py-1 rounded-full">
                            {tag.clone()}
                        </span>
                    }).collect_view()}
                </div>
            })}
        </div>
    }
}

#[component]
fn Fact(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <div class="text-gray-500 text-xs uppercase">{label}</div>
            <div class="mt-1 text-sm">{value}</div>
        </div>
    }
}
