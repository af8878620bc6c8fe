//! Funding Page
//!
//! Funding rounds list with a recent-transactions strip, filterable by round
//! type.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::models::{CompanyStatistics, FundingRound};
use crate::api::Page;
use crate::components::{format_usd, FilterGroup, ListSkeleton, LoadError, Pagination, SearchBar};
use crate::state::{FilterQuery, RequestSequence, PAGE_SIZE};

const ROUND_TYPES: &[(&str, &str)] = &[
    ("Pre-seed", "Pre-seed"),
    ("Seed", "Seed"),
    ("Series A", "Series A"),
    ("Series B", "Series B"),
    ("Series C", "Series C"),
    ("Series D+", "Series D+"),
    ("Grant", "Grant"),
    ("Debt", "Debt"),
];

#[component]
pub fn Funding() -> impl IntoView {
    let search = use_location().search;

    let (page_data, set_page_data) = create_signal(Page::<FundingRound>::default());
    let (recent, set_recent) = create_signal(Vec::<FundingRound>::new());
    let (stats, set_stats) = create_signal(CompanyStatistics::default());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (reload, set_reload) = create_signal(0u32);

    let draft = create_rw_signal(FilterQuery::parse(&search.get_untracked()));

    // Recent strip and headline totals load once, independent of filters
    create_effect(move |_| {
        spawn_local(async move {
            match api::funding::recent().await {
                Ok(rounds) => set_recent.set(rounds),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load recent funding: {}", e).into(),
                    );
                }
            }
        });
        spawn_local(async move {
            match api::companies::statistics().await {
                Ok(data) => set_stats.set(data),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load company statistics: {}", e).into(),
                    );
                }
            }
        });
    });

    let sequence = RequestSequence::new();
    create_effect(move |_| {
        reload.get();
        let query = FilterQuery::parse(&search.get());
        draft.set(query.clone());

        let ticket = sequence.begin();
        set_loading.set(true);
        spawn_local(async move {
            let result = api::funding::list(&query).await;
            if !ticket.is_current() {
                return;
            }
            match result {
                Ok(page) => {
                    set_page_data.set(page);
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load funding rounds: {}", e).into(),
                    );
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
            navigate(&format!("/funding?{}", qs), Default::default());
        }
    };
    let go_to_page = move |page: u64| {
        let mut query = FilterQuery::parse(&search.get_untracked());
        query.set_page(page);
        navigate(
            &format!("/funding?{}", query.to_query_string()),
            Default::default(),
        );
    };

    let round_options = ROUND_TYPES
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect::<Vec<_>>();

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Funding Activity"</h1>
                <p class="text-gray-400 mt-1">
                    {move || format!("{} funding rounds tracked", page_data.get().count)}
                </p>
                {move || {
                    let totals = stats.get();
                    (totals.total_companies > 0).then(|| view! {
                        <p class="text-gray-500 text-sm mt-1">
                            {format!(
                                "{} raised across {} companies",
                                format_usd(totals.total_funding_usd),
                                totals.total_companies,
                            )}
                        </p>
                    })
                }}
            </div>

            // Recent transactions strip
            {move || {
                let rounds = recent.get();
                if rounds.is_empty() {
                    return ().into_view();
                }
                view! {
                    <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
                        <h2 class="text-sm font-semibold text-gray-400 uppercase mb-3">
                            "Recent Transactions"
                        </h2>
                        <div class="flex space-x-4 overflow-x-auto pb-2">
                            {rounds.into_iter().take(8).map(|round| view! {
                                <div class="flex-shrink-0 bg-gray-700/50 rounded-lg p-3 min-w-[180px]">
                                    <div class="font-medium text-sm">
                                        {round.company_name.unwrap_or_default()}
                                    </div>
                                    <div class="text-gray-400 text-xs mt-1">
                                        {round.round_type.unwrap_or_default()}
                                    </div>
                                    <div class="text-primary-400 text-sm mt-1">
                                        {round
                                            .money_raised_display
                                            .or_else(|| round.money_raised_usd.map(format_usd))
                                            .unwrap_or_else(|| "Undisclosed".into())}
                                    </div>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                }.into_view()
            }}

            <SearchBar draft=draft on_apply=apply.clone() placeholder="Search by company..." />

            <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
                <FilterGroup
                    title="Round Type"
                    key="round_type"
                    options=round_options
                    draft=draft
                />
                <button
                    on:click={
                        let apply = apply.clone();
                        move |_| apply(())
                    }
                    class="mt-4 px-6 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                           font-medium transition-colors"
                >
                    "Apply Filters"
                </button>
            </div>

            {move || {
                if loading.get() {
                    return view! { <ListSkeleton count=8 /> }.into_view();
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
                            <p class="text-gray-400">"No funding rounds match your filters."</p>
                        </div>
                    }.into_view();
                }
                view! {
                    <div class="space-y-3">
                        {page.items.into_iter().map(|round| view! {
                            <div class="bg-gray-800 rounded-xl p-4 border border-gray-700
                                        flex items-center justify-between">
                                <div>
                                    <span class="font-semibold">
                                        {round.company_name.unwrap_or_default()}
                                    </span>
                                    <span class="bg-gray-700 text-gray-300 text-xs px-2 py-0.5
                                                 rounded-full ml-3">
                                        {round.round_type.unwrap_or_else(|| "Round".into())}
                                    </span>
                                </div>
                                <div class="text-right">
                                    <div class="text-primary-400 font-medium">
                                        {round
                                            .money_raised_display
                                            .or_else(|| round.money_raised_usd.map(format_usd))
                                            .unwrap_or_else(|| "Undisclosed".into())}
                                    </div>
                                    <div class="text-gray-500 text-sm">
                                        {round.announced_date.unwrap_or_default()}
                                    </div>
                                </div>
                            </div>
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
