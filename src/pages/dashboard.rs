//! Dashboard Page
//!
//! Signed-in overview: headline numbers, recent companies and funding, and an
//! industry breakdown. Stats poll every 10 seconds while the page is mounted;
//! the interval is dropped on navigation.

use gloo_timers::callback::Interval;
use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::models::DashboardStats;
use crate::auth::use_session;
use crate::components::{format_usd, CardSkeleton, StatCard};

const POLL_INTERVAL_MS: u32 = 10_000;

#[component]
pub fn Dashboard() -> impl IntoView {
    let session = use_session();

    let (stats, set_stats) = create_signal(DashboardStats::default());
    let (loading, set_loading) = create_signal(true);
    let (refreshing, set_refreshing) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let fetch_stats = move || {
        spawn_local(async move {
            match api::stats::dashboard().await {
                Ok(data) => {
                    set_stats.set(data);
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load dashboard: {}", e).into(),
                    );
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
            set_refreshing.set(false);
        });
    };

    fetch_stats();

    // Poll while mounted
    let interval = Interval::new(POLL_INTERVAL_MS, fetch_stats);
    on_cleanup(move || drop(interval));

    let refresh = move |_| {
        set_refreshing.set(true);
        fetch_stats();
    };

    let greeting = move || {
        session
            .state
            .with(|s| s.user().map(|u| u.username.clone()))
            .filter(|u| !u.is_empty())
            .map(|u| format!("Welcome back, {}", u))
            .unwrap_or_else(|| "Welcome back".to_string())
    };

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">{greeting}</h1>
                    <p class="text-gray-400 mt-1">"Live snapshot of the ecosystem"</p>
                </div>
                <button
                    on:click=refresh
                    disabled=move || refreshing.get()
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 disabled:text-gray-500
                           rounded-lg text-sm font-medium transition-colors"
                >
                    {move || if refreshing.get() { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>

            {move || error.get().map(|message| view! {
                <div class="bg-red-900/30 border border-red-700 rounded-lg p-3
                            text-red-300 text-sm">
                    {format!("Stats may be stale: {}", message)}
                </div>
            })}

            // Headline numbers
            {move || {
                if loading.get() {
                    return view! {
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                            <CardSkeleton />
                            <CardSkeleton />
                            <CardSkeleton />
                            <CardSkeleton />
                        </div>
                    }.into_view();
                }
                view! {
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                        <StatCard
                            label="Companies"
                            value=Signal::derive(move || {
                                stats.get().overview.total_companies.to_string()
                            })
                            hint="Listed in the directory"
                        />
                        <StatCard
                            label="Active"
                            value=Signal::derive(move || {
                                stats.get().overview.active_companies.to_string()
                            })
                            hint="Currently operating"
                        />
                        <StatCard
                            label="Investors"
                            value=Signal::derive(move || {
                                stats.get().overview.total_investors.to_string()
                            })
                        />
                        <StatCard
                            label="Total Funding"
                            value=Signal::derive(move || {
                                format_usd(stats.get().overview.total_funding)
                            })
                            hint="Across all tracked rounds"
                        />
                    </div>
                }.into_view()
            }}

            <div class="grid lg:grid-cols-2 gap-6">
                // Recent companies
                <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                    <h2 class="text-lg font-bold mb-4">"Recently Added Companies"</h2>
                    {move || {
                        let companies = stats.get().recent_companies;
                        if companies.is_empty() {
                            return view! {
                                <p class="text-gray-400 text-sm">"Nothing new yet."</p>
                            }.into_view();
                        }
                        view! {
                            <div class="space-y-3">
                                {companies.into_iter().map(|company| view! {
                                    <A
                                        href=format!("/companies/{}", company.slug)
                                        class="block bg-gray-700/50 rounded-lg p-3
                                               hover:bg-gray-700 transition-colors"
                                    >
                                        <div class="font-medium">{company.name}</div>
                                        <div class="text-gray-400 text-sm line-clamp-1">
                                            {company.short_description}
                                        </div>
                                    </A>
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }}
                </div>

                // Recent funding
                <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                    <h2 class="text-lg font-bold mb-4">"Latest Funding Rounds"</h2>
                    {move || {
                        let rounds = stats.get().recent_funding;
                        if rounds.is_empty() {
                            return view! {
                                <p class="text-gray-400 text-sm">"No recent rounds."</p>
                            }.into_view();
                        }
                        view! {
                            <div class="space-y-3">
                                {rounds.into_iter().map(|round| view! {
                                    <div class="flex items-center justify-between
                                                bg-gray-700/50 rounded-lg p-3">
                                        <div>
                                            <div class="font-medium">{round.company_name}</div>
                                            <div class="text-gray-400 text-sm">
                                                {format!(
                                                    "{} · {}",
                                                    round.round_type, round.announced_date
                                                )}
                                            </div>
                                        </div>
                                        <span class="text-primary-400 font-medium">
                                            {format_usd(round.money_raised_usd)}
                                        </span>
                                    </div>
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }}
                </div>
            </div>

            // Industry breakdown
            <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                <h2 class="text-lg font-bold mb-4">"Companies by Industry"</h2>
                {move || {
                    let industries = stats.get().industry_stats;
                    if industries.is_empty() {
                        return view! {
                            <p class="text-gray-400 text-sm">"No industry data yet."</p>
                        }.into_view();
                    }
                    let max = industries
                        .iter()
                        .map(|i| i.company_count)
                        .max()
                        .unwrap_or(1)
                        .max(1);
                    view! {
                        <div class="space-y-3">
                            {industries.into_iter().map(|industry| {
                                let percent = industry.company_count * 100 / max;
                                view! {
                                    <div>
                                        <div class="flex items-center justify-between text-sm mb-1">
                                            <span>{industry.name}</span>
                                            <span class="text-gray-400">
                                                {industry.company_count.to_string()}
                                            </span>
                                        </div>
                                        <div class="w-full bg-gray-700 rounded-full h-2">
                                            <div
                                                class="bg-primary-600 h-2 rounded-full"
                                                style=format!("width: {}%", percent)
                                            />
                                        </div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_view()
                }}
            </div>
        </div>
    }
}
