//! Home Page
//!
//! Hero, headline ecosystem numbers, and featured content.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::models::{CuratedContent, DashboardStats};
use crate::components::{format_usd, CardSkeleton, StatCard};

/// Landing page
#[component]
pub fn Home() -> impl IntoView {
    let (stats, set_stats) = create_signal(DashboardStats::default());
    let (featured, set_featured) = create_signal(Vec::<CuratedContent>::new());
    let (loading, set_loading) = create_signal(true);

    create_effect(move |_| {
        spawn_local(async move {
            match api::stats::dashboard().await {
                Ok(data) => set_stats.set(data),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load stats: {}", e).into());
                }
            }
            set_loading.set(false);
        });
        spawn_local(async move {
            match api::content::featured().await {
                Ok(items) => set_featured.set(items),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load featured content: {}", e).into(),
                    );
                }
            }
        });
    });

    view! {
        <div class="space-y-12">
            // Hero
            <section class="text-center py-12">
                <h1 class="text-4xl md:text-5xl font-bold mb-4">
                    "Discover the Startup Ecosystem"
                </h1>
                <p class="text-gray-400 text-lg max-w-2xl mx-auto mb-8">
                    "Explore companies, investors, funding activity, and the hubs, \
                     incubators, accelerators, and universities that power them."
                </p>
                <div class="flex items-center justify-center space-x-4">
                    <A
                        href="/companies"
                        class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg
                               font-medium transition-colors"
                    >
                        "Browse Companies"
                    </A>
                    <A
                        href="/signup-organization"
                        class="px-6 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg
                               font-medium transition-colors"
                    >
                        "Join the Directory"
                    </A>
                </div>
            </section>

            // Headline numbers
            <section>
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
                            />
                            <StatCard
                                label="Funding Rounds"
                                value=Signal::derive(move || {
                                    stats.get().overview.total_rounds.to_string()
                                })
                            />
                        </div>
                    }.into_view()
                }}
            </section>

            // Ecosystem builder shortcuts
            <section class="grid md:grid-cols-4 gap-4">
                <BuilderShortcut
                    href="/hubs"
                    icon="🏢"
                    label="Innovation Hubs"
                    count=Signal::derive(move || stats.get().overview.total_hubs)
                />
                <BuilderShortcut
                    href="/incubators"
                    icon="🌱"
                    label="Incubators"
                    count=Signal::derive(move || stats.get().overview.total_incubators)
                />
                <BuilderShortcut
                    href="/accelerators"
                    icon="🚀"
                    label="Accelerators"
                    count=Signal::derive(move || stats.get().overview.total_accelerators)
                />
                <BuilderShortcut
                    href="/universities"
                    icon="🎓"
                    label="Universities"
                    count=Signal::derive(move || stats.get().overview.total_universities)
                />
            </section>

            // Featured content
            {move || {
                let items = featured.get();
                if items.is_empty() {
                    return ().into_view();
                }
                view! {
                    <section>
                        <div class="flex items-center justify-between mb-4">
                            <h2 class="text-2xl font-bold">"Featured Resources"</h2>
                            <A href="/content" class="text-primary-400 hover:text-primary-300 text-sm">
                                "View all"
                            </A>
                        </div>
                        <div class="grid md:grid-cols-3 gap-4">
                            {items.into_iter().take(3).map(|item| view! {
                                <A
                                    href=format!("/content/{}", item.slug)
                                    class="block bg-gray-800 rounded-xl p-4 border border-gray-700
                                           hover:border-gray-600 transition-colors"
                                >
                                    <span class="text-xs text-primary-400 uppercase">
                                        {item.content_type_display.unwrap_or_default()}
                                    </span>
                                    <h3 class="font-semibold mt-1">{item.title}</h3>
                                    <p class="text-gray-400 text-sm mt-2 line-clamp-3">
                                        {item.description.unwrap_or_default()}
                                    </p>
                                </A>
                            }).collect_view()}
                        </div>
                    </section>
                }.into_view()
            }}
        </div>
    }
}

#[component]
fn BuilderShortcut(
    href: &'static str,
    icon: &'static str,
    label: &'static str,
    #[prop(into)]
    count: Signal<u64>,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="bg-gray-800 rounded-xl p-6 border border-gray-700 hover:border-gray-600
                   transition-colors text-center"
        >
            <div class="text-3xl mb-2">{icon}</div>
            <div class="font-semibold">{label}</div>
            <div class="text-gray-400 text-sm mt-1">
                {move || format!("{} listed", count.get())}
            </div>
        </A>
    }
}
