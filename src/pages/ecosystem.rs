//! Ecosystem Overview Page
//!
//! Aggregate view of the whole directory: growth numbers, the largest
//! industries by company count, and where companies are headquartered.

use leptos::*;

use crate::api;
use crate::api::models::EcosystemOverview;
use crate::components::{format_usd, CardSkeleton, LoadError, StatCard};

#[component]
pub fn Ecosystem() -> impl IntoView {
    let (data, set_data) = create_signal(EcosystemOverview::default());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (reload, set_reload) = create_signal(0u32);

    create_effect(move |_| {
        reload.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::stats::ecosystem().await {
                Ok(overview) => {
                    set_data.set(overview);
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load ecosystem overview: {}", e).into(),
                    );
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Ecosystem Overview"</h1>
                <p class="text-gray-400 mt-1">
                    "Growth, funding, and geography across the whole directory"
                </p>
            </div>

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
                if let Some(message) = error.get() {
                    return view! {
                        <LoadError
                            message=message
                            on_retry=move |_| set_reload.update(|n| *n += 1)
                        />
                    }.into_view();
                }
                let overview = data.get().overview;
                let avg_funding = overview.total_funding
                    / overview.total_companies.max(1) as f64;
                view! {
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                        <StatCard
                            label="Companies"
                            value=Signal::derive(move || {
                                data.get().overview.total_companies.to_string()
                            })
                            hint=format!("{:.1}% growth", overview.growth_rate)
                        />
                        <StatCard
                            label="Total Funding"
                            value=Signal::derive(move || {
                                format_usd(data.get().overview.total_funding)
                            })
                            hint=format!("{} this year", format_usd(overview.funding_this_year))
                        />
                        <StatCard
                            label="New This Year"
                            value=Signal::derive(move || {
                                data.get().overview.companies_this_year.to_string()
                            })
                            hint=format!("vs {} last year", overview.companies_last_year)
                        />
                        <StatCard
                            label="Avg Funding"
                            value=Signal::derive(move || {
                                let o = data.get().overview;
                                format_usd(o.total_funding / o.total_companies.max(1) as f64)
                            })
                            hint=format!("{} per company", format_usd(avg_funding))
                        />
                    </div>
                }.into_view()
            }}

            <div class="grid lg:grid-cols-2 gap-6">
                // Largest industries
                <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                    <h2 class="text-lg font-bold mb-4">"Top Industries"</h2>
                    {move || {
                        let industries = data.get().top_industries;
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
                                                    {format!(
                                                        "{} · {}",
                                                        industry.company_count,
                                                        industry
                                                            .total_funding
                                                            .map(format_usd)
                                                            .unwrap_or_else(|| "—".into()),
                                                    )}
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

                // Headquarters distribution
                <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                    <h2 class="text-lg font-bold mb-4">"Where Companies Are Based"</h2>
                    {move || {
                        let locations = data.get().geographic_distribution;
                        if locations.is_empty() {
                            return view! {
                                <p class="text-gray-400 text-sm">"No location data yet."</p>
                            }.into_view();
                        }
                        view! {
                            <div class="space-y-2">
                                {locations.into_iter().take(10).map(|entry| {
                                    let place = [entry.hq_city, entry.hq_country]
                                        .into_iter()
                                        .flatten()
                                        .collect::<Vec<_>>()
                                        .join(", ");
                                    view! {
                                        <div class="flex items-center justify-between
                                                    bg-gray-700/50 rounded-lg p-3 text-sm">
                                            <span>
                                                {if place.is_empty() {
                                                    "Unknown".to_string()
                                                } else {
                                                    place
                                                }}
                                            </span>
                                            <div class="flex items-center space-x-4 text-gray-400">
                                                <span>{format!("{} companies", entry.count)}</span>
                                                {entry.total_funding.map(|funding| view! {
                                                    <span class="text-primary-400">
                                                        {format_usd(funding)}
                                                    </span>
                                                })}
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }}
                </div>
            </div>
        </div>
    }
}
