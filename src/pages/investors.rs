//! Investors Pages
//!
//! Directory of investors plus a detail view with the investor's portfolio.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::models::{CompanySummary, Investor};
use crate::api::Page;
use crate::components::{format_usd, ListSkeleton, LoadError, Loading, Pagination, SearchBar};
use crate::state::{FilterQuery, RequestSequence, PAGE_SIZE};

/// Investor directory page
#[component]
pub fn Investors() -> impl IntoView {
    let search = use_location().search;

    let (page_data, set_page_data) = create_signal(Page::<Investor>::default());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (reload, set_reload) = create_signal(0u32);

    let draft = create_rw_signal(FilterQuery::parse(&search.get_untracked()));

    let sequence = RequestSequence::new();
    create_effect(move |_| {
        reload.get();
        let query = FilterQuery::parse(&search.get());
        draft.set(query.clone());

        let ticket = sequence.begin();
        set_loading.set(true);
        spawn_local(async move {
            let result = api::investors::list(&query).await;
            if !ticket.is_current() {
                return;
            }
            match result {
                Ok(page) => {
                    set_page_data.set(page);
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load investors: {}", e).into());
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
            navigate(&format!("/investors?{}", qs), Default::default());
        }
    };
    let go_to_page = move |page: u64| {
        let mut query = FilterQuery::parse(&search.get_untracked());
        query.set_page(page);
        navigate(
            &format!("/investors?{}", query.to_query_string()),
            Default::default(),
        );
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Investors"</h1>
                <p class="text-gray-400 mt-1">
                    {move || format!("{} investors backing the ecosystem", page_data.get().count)}
                </p>
            </div>

            <SearchBar draft=draft on_apply=apply placeholder="Search investors..." />

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
                            <p class="text-gray-400">"No investors found."</p>
                        </div>
                    }.into_view();
                }
                view! {
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                        {page.items.into_iter().map(|investor| view! {
                            <InvestorCard investor=investor />
                        }).collect_view()}
                    </div>
                }.into_view()
            }}

            <Pagination
                page=Signal::derive(move || FilterQuery::parse(&search.get()).page)
                total_pages=Signal::derive(move || page_data.get().total_pages(PAGE_SIZE))
                on_page=go_to_page
            />
        </div>
    }
}

#[component]
fn InvestorCard(investor: Investor) -> impl IntoView {
    let href = format!("/investors/{}", investor.slug);
    let location = [investor.hq_city.clone(), investor.hq_country.clone()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <A href=href class="block bg-gray-800 rounded-xl p-4 border border-gray-700
                            hover:border-gray-600 transition-colors">
            <div class="flex items-start justify-between">
                <h3 class="font-semibold">{investor.name}</h3>
                {investor.investor_type.map(|kind| view! {
                    <span class="bg-gray-700 text-gray-300 text-xs px-2 py-0.5 rounded-full">
                        {kind}
                    </span>
                })}
            </div>
            <p class="text-gray-400 text-sm mt-2 line-clamp-2">
                {investor.description.unwrap_or_default()}
            </p>
            <div class="flex items-center justify-between mt-3 text-sm text-gray-500">
                <span>{location}</span>
                <span>{format!("{} portfolio companies", investor.portfolio_count)}</span>
            </div>
        </A>
    }
}

/// Investor profile with portfolio companies
#[component]
pub fn InvestorDetail() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.with(|p| p.get("slug").cloned().unwrap_or_default());

    let (investor, set_investor) = create_signal(None::<Investor>);
    let (portfolio, set_portfolio) = create_signal(Vec::<CompanySummary>::new());
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
            let detail = api::investors::get(&slug).await;
            match detail {
                Ok(data) => {
                    set_investor.set(Some(data));
                    set_error.set(None);
                    // Portfolio failures leave the profile intact
                    if let Ok(companies) = api::investors::portfolio(&slug).await {
                        set_portfolio.set(companies);
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load investor: {}", e).into());
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
            let Some(investor) = investor.get() else {
                return ().into_view();
            };
            let companies = portfolio.get();
            view! {
                <div class="space-y-8">
                    <A href="/investors" class="text-primary-400 hover:text-primary-300 text-sm">
                        "← Back to investors"
                    </A>

                    <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                        <div class="flex items-start justify-between">
                            <div>
                                <h1 class="text-3xl font-bold">{investor.name.clone()}</h1>
                                {investor.investor_type.clone().map(|kind| view! {
                                    <span class="inline-block bg-gray-700 text-gray-300 text-xs
                                                 px-2 py-0.5 rounded-full mt-2">
                                        {kind}
                                    </span>
                                })}
                                <p class="text-gray-400 mt-3">
                                    {investor.description.clone().unwrap_or_default()}
                                </p>
                            </div>
                            {investor.website.clone().map(|website| view! {
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
                        <div class="flex items-center space-x-8 mt-4 text-sm text-gray-400">
                            <span>{format!("{} portfolio companies", investor.portfolio_count)}</span>
                            {investor.total_investments.map(|total| view! {
                                <span>{format!("{} invested", format_usd(total))}</span>
                            })}
                        </div>
                    </div>

                    <div>
                        <h2 class="text-xl font-bold mb-4">"Portfolio"</h2>
                        {if companies.is_empty() {
                            view! {
                                <p class="text-gray-400">"No portfolio companies listed yet."</p>
                            }.into_view()
                        } else {
                            view! {
                                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                                    {companies.into_iter().map(|company| view! {
                                        <A
                                            href=format!("/companies/{}", company.slug)
                                            class="block bg-gray-800 rounded-xl p-4 border
                                                   border-gray-700 hover:border-gray-600
                                                   transition-colors"
                                        >
                                            <h3 class="font-semibold">{company.name}</h3>
                                            <p class="text-gray-400 text-sm mt-1 line-clamp-2">
                                                {company.short_description.unwrap_or_default()}
                                            </p>
                                        </A>
                                    }).collect_view()}
                                </div>
                            }.into_view()
                        }}
                    </div>
                </div>
            }.into_view()
        }}
    }
}
