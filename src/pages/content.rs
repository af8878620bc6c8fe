//! Curated Content Pages
//!
//! Resources view: featured row on top, then content grouped by type. The
//! detail view renders a single article or links out to the external source.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::content::ContentGroup;
use crate::api::models::CuratedContent;
use crate::components::{ListSkeleton, LoadError, Loading};

#[component]
pub fn Content() -> impl IntoView {
    let (featured, set_featured) = create_signal(Vec::<CuratedContent>::new());
    let (groups, set_groups) = create_signal(Vec::<(String, ContentGroup)>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (reload, set_reload) = create_signal(0u32);

    create_effect(move |_| {
        reload.get();
        set_loading.set(true);
        spawn_local(async move {
            let grouped = api::content::by_type().await;
            match grouped {
                Ok(map) => {
                    set_groups.set(map.into_iter().collect());
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load content: {}", e).into());
                    set_error.set(Some(e.to_string()));
                }
            }
            if let Ok(items) = api::content::featured().await {
                set_featured.set(items);
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Resources"</h1>
                <p class="text-gray-400 mt-1">
                    "Guides, reports, and news from across the ecosystem"
                </p>
            </div>

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
                let featured_items = featured.get();
                let grouped = groups.get();
                view! {
                    <div class="space-y-10">
                        // Featured row
                        {(!featured_items.is_empty()).then(|| view! {
                            <section>
                                <h2 class="text-xl font-bold mb-4">"Featured"</h2>
                                <div class="grid md:grid-cols-3 gap-4">
                                    {featured_items.iter().map(|item| view! {
                                        <ContentCard item=item.clone() highlighted=true />
                                    }).collect_view()}
                                </div>
                            </section>
                        })}

                        // Grouped by type
                        {grouped.into_iter().map(|(_, group)| view! {
                            <section>
                                <h2 class="text-xl font-bold mb-4">{group.name.clone()}</h2>
                                <div class="grid md:grid-cols-3 gap-4">
                                    {group.content.iter().map(|item| view! {
                                        <ContentCard item=item.clone() highlighted=false />
                                    }).collect_view()}
                                </div>
                            </section>
                        }).collect_view()}
                    </div>
                }.into_view()
            }}
        </div>
    }
}

#[component]
fn ContentCard(item: CuratedContent, highlighted: bool) -> impl IntoView {
    let border = if highlighted {
        "border-primary-700"
    } else {
        "border-gray-700"
    };
    view! {
        <A
            href=format!("/content/{}", item.slug)
            class=format!(
                "block bg-gray-800 rounded-xl p-4 border {} hover:border-gray-600 \
                 transition-colors",
                border
            )
        >
            <span class="text-xs text-primary-400 uppercase">
                {item.content_type_display.unwrap_or_default()}
            </span>
            <h3 class="font-semibold mt-1">{item.title}</h3>
            <p class="text-gray-400 text-sm mt-2 line-clamp-3">
                {item.description.unwrap_or_default()}
            </p>
            {item.published_date.map(|date| view! {
                <p class="text-gray-500 text-xs mt-3">{date}</p>
            })}
        </A>
    }
}

/// Single resource view
#[component]
pub fn ContentDetail() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.with(|p| p.get("slug").cloned().unwrap_or_default());

    let (item, set_item) = create_signal(None::<CuratedContent>);
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
            match api::content::get(&slug).await {
                Ok(data) => {
                    set_item.set(Some(data));
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load resource: {}", e).into());
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
            let Some(item) = item.get() else {
                return ().into_view();
            };
            view! {
                <article class="max-w-3xl mx-auto space-y-6">
                    <A href="/content" class="text-primary-400 hover:text-primary-300 text-sm">
                        "← Back to resources"
                    </A>
                    <div>
                        <span class="text-xs text-primary-400 uppercase">
                            {item.content_type_display.clone().unwrap_or_default()}
                        </span>
                        <h1 class="text-3xl font-bold mt-2">{item.title.clone()}</h1>
                        {item.published_date.clone().map(|date| view! {
                            <p class="text-gray-500 text-sm mt-2">{date}</p>
                        })}
                    </div>
                    {item.description.clone().map(|description| view! {
                        <p class="text-gray-300 text-lg">{description}</p>
                    })}
                    {item.content.clone().map(|content| view! {
                        <div class="text-gray-300 whitespace-pre-line leading-relaxed">
                            {content}
                        </div>
                    })}
                    {item.external_url.clone().map(|url| view! {
                        <a
                            href=url
                            target="_blank"
                            rel="noopener"
                            class="inline-block px-6 py-3 bg-primary-600 hover:bg-primary-700
                                   rounded-lg font-medium transition-colors"
                        >
                            "Read the Full Resource"
                        </a>
                    })}
                </article>
            }.into_view()
        }}
    }
}
