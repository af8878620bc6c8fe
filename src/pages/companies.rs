//! Companies Page
//!
//! Searchable, filterable company directory with page-number pagination.
//! Filter state lives in a draft `FilterQuery` and reaches the URL only on
//! Apply; the URL's query string is what triggers a re-fetch.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::models::CompanySummary;
use crate::api::Page;
use crate::components::{FilterGroup, ListSkeleton, LoadError, Pagination, SearchBar};
use crate::state::{FilterQuery, RequestSequence, PAGE_SIZE};

const COMPANY_TYPES: &[(&str, &str)] = &[
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

const EMPLOYEE_RANGES: &[(&str, &str)] = &[
    ("1-10", "1-10 employees"),
    ("11-50", "11-50 employees"),
    ("51-200", "51-200 employees"),
    ("201-500", "201-500 employees"),
    ("501-1000", "501-1000 employees"),
    ("1001-5000", "1001-5000 employees"),
    ("5000+", "5000+ employees"),
];

const FUNDING_STAGES: &[(&str, &str)] = &[
    ("Pre-seed", "Pre-seed"),
    ("Seed", "Seed"),
    ("Series A", "Series A"),
    ("Series B", "Series B"),
    ("Series C", "Series C"),
    ("Series D+", "Series D+"),
    ("Grant", "Grant"),
    ("Bootstrapped", "Bootstrapped"),
];

fn static_options(options: &[(&str, &str)]) -> Vec<(String, String)> {
    options
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect()
}

/// Company directory page
#[component]
pub fn Companies() -> impl IntoView {
    let search = use_location().search;

    let (page_data, set_page_data) = create_signal(Page::<CompanySummary>::default());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (reload, set_reload) = create_signal(0u32);
    let (show_filters, set_show_filters) = create_signal(false);

    // Draft filter state, seeded from the URL and re-seeded on navigation
    let draft = create_rw_signal(FilterQuery::parse(&search.get_untracked()));

    // Industry options for the filter panel
    let (industry_options, set_industry_options) = create_signal(Vec::<(String, String)>::new());
    create_effect(move |_| {
        spawn_local(async move {
            match api::industries::all().await {
                Ok(industries) => {
                    set_industry_options.set(
                        industries
                            .into_iter()
                            .map(|i| (i.id.to_string(), i.name))
                            .collect(),
                    );
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load industries: {}", e).into(),
                    );
                }
            }
        });
    });

    // Fetch whenever the URL query string (or a retry) changes; only the
    // latest ticket commits its response
    let sequence = RequestSequence::new();
    create_effect(move |_| {
        reload.get();
        let query = FilterQuery::parse(&search.get());
        draft.set(query.clone());

        let ticket = sequence.begin();
        set_loading.set(true);
        spawn_local(async move {
            let result = api::companies::list(&query).await;
            if !ticket.is_current() {
                return;
            }
            match result {
                Ok(page) => {
                    set_page_data.set(page);
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

    let navigate = use_navigate();
    let apply = {
        let navigate = navigate.clone();
        move |_: ()| {
            let qs = draft.with_untracked(|d| {
                let mut applied = d.clone();
                applied.set_page(1);
                applied.to_query_string()
            });
            navigate(&format!("/companies?{}", qs), Default::default());
        }
    };

    let go_to_page = {
        let navigate = navigate.clone();
        move |page: u64| {
            let mut query = FilterQuery::parse(&search.get_untracked());
            query.set_page(page);
            navigate(
                &format!("/companies?{}", query.to_query_string()),
                Default::default(),
            );
        }
    };

    view! {
        <div class="space-y-6">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Companies"</h1>
                    <p class="text-gray-400 mt-1">
                        {move || format!("{} companies in the directory", page_data.get().count)}
                    </p>
                </div>
                <A
                    href="/register-company"
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                           font-medium transition-colors"
                >
                    "+ Add Company"
                </A>
            </div>

            // Search + filter toggle
            <div class="space-y-4">
                <SearchBar draft=draft on_apply=apply.clone() placeholder="Search companies..." />
                <button
                    on:click=move |_| set_show_filters.update(|v| *v = !*v)
                    class="text-sm text-primary-400 hover:text-primary-300"
                >
                    {move || {
                        let active = draft.with(|d| d.active_count());
                        if show_filters.get() {
                            "Hide filters".to_string()
                        } else if active > 0 {
                            format!("Show filters ({} active)", active)
                        } else {
                            "Show filters".to_string()
                        }
                    }}
                </button>
            </div>

            // Filter panel
            {move || {
                if !show_filters.get() {
                    return ().into_view();
                }
                let apply_filters = apply.clone();
                view! {
                    <div class="bg-gray-800 rounded-xl p-6 space-y-6">
                        <div class="grid md:grid-cols-2 lg:grid-cols-5 gap-6">
                            <FilterGroup
                                title="Industries"
                                key="industries"
                                options=industry_options
                                draft=draft
                            />
                            <FilterGroup
                                title="Company Type"
                                key="company_type"
                                options=static_options(COMPANY_TYPES)
                                draft=draft
                            />
                            <FilterGroup
                                title="Status"
                                key="status"
                                options=static_options(STATUS_OPTIONS)
                                draft=draft
                            />
                            <FilterGroup
                                title="Team Size"
                                key="employee_count_range"
                                options=static_options(EMPLOYEE_RANGES)
                                draft=draft
                            />
                            <FilterGroup
                                title="Funding Stage"
                                key="last_funding_stage"
                                options=static_options(FUNDING_STAGES)
                                draft=draft
                            />
                        </div>
                        <button
                            on:click=move |_| apply_filters(())
                            class="px-6 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                                   font-medium transition-colors"
                        >
                            "Apply Filters"
                        </button>
                    </div>
                }.into_view()
            }}

            // Results
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
                let page = page_data.get();
                if page.items.is_empty() {
                    return view! {
                        <div class="text-center py-12">
                            <p class="text-gray-400">"No companies match your search."</p>
                        </div>
                    }.into_view();
                }
                view! {
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                        {page.items.into_iter().map(|company| {
                            view! { <CompanyCard company=company /> }
                        }).collect_view()}
                    </div>
                }.into_view()
            }}

            // Pagination
            <Pagination
                page=Signal::derive(move || FilterQuery::parse(&search.get()).page)
                total_pages=Signal::derive(move || page_data.get().total_pages(PAGE_SIZE))
                on_page=go_to_page
            />
        </div>
    }
}

/// Single company card
#[component]
fn CompanyCard(company: CompanySummary) -> impl IntoView {
    let status_color = match company.status.as_deref() {
        Some("Operating") => "bg-green-500",
        Some("Acquired") => "bg-blue-500",
        Some("Closed") => "bg-red-500",
        _ => "bg-gray-500",
    };
    let href = format!("/companies/{}", company.slug);
    let location = [company.hq_city.clone(), company.hq_country.clone()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <A href=href class="block bg-gray-800 rounded-xl p-4 border border-gray-700
                            hover:border-gray-600 transition-colors">
            <div class="flex items-start justify-between">
                <h3 class="font-semibold">{company.name}</h3>
                {company.status.map(|status| view! {
                    <span class=format!(
                        "{} text-xs px-2 py-0.5 rounded-full text-white", status_color
                    )>
                        {status}
                    </span>
                })}
            </div>
            <p class="text-gray-400 text-sm mt-2 line-clamp-2">
                {company.short_description.unwrap_or_default()}
            </p>
            <div class="flex flex-wrap gap-1 mt-3">
                {company.industries.into_iter().take(3).map(|industry| view! {
                    <span class="bg-gray-700 text-gray-300 text-xs px-2 py-0.5 rounded-full">
                        {industry.name}
                    </span>
                }).collect_view()}
            </div>
            <div class="flex items-center justify-between mt-3 text-sm text-gray-500">
                <span>{location}</span>
                {company.total_funding_display.map(|funding| view! {
                    <span class="text-gray-400">{funding}</span>
                })}
            </div>
        </A>
    }
}
