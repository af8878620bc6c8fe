//! Industries Page
//!
//! Sector taxonomy with rolled-up company counts; each card links into the
//! pre-filtered company directory, and sub-industries link individually.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::models::Sector;
use crate::components::{ListSkeleton, LoadError};

#[component]
pub fn Industries() -> impl IntoView {
    let (sectors, set_sectors) = create_signal(Vec::<Sector>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (reload, set_reload) = create_signal(0u32);

    create_effect(move |_| {
        reload.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::industries::sectors().await {
                Ok(items) => {
                    set_sectors.set(items);
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load sectors: {}", e).into());
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Industries"</h1>
                <p class="text-gray-400 mt-1">"Browse companies by sector"</p>
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
                let items = sectors.get();
                if items.is_empty() {
                    return view! {
                        <div class="text-center py-12">
                            <p class="text-gray-400">"No industries listed yet."</p>
                        </div>
                    }.into_view();
                }
                view! {
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                        {items.into_iter().map(|sector| view! {
                            <SectorCard sector=sector />
                        }).collect_view()}
                    </div>
                }.into_view()
            }}
        </div>
    }
}

#[component]
fn SectorCard(sector: Sector) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700
                    hover:border-gray-600 transition-colors">
            <A
                href=format!("/companies?industries={}", sector.id)
                class="block"
            >
                <div class="flex items-center justify-between">
                    <h3 class="font-semibold">{sector.name}</h3>
                    <span class="bg-gray-700 text-gray-300 text-xs px-2 py-0.5 rounded-full">
                        {format!("{} companies", sector.company_count)}
                    </span>
                </div>
                <p class="text-gray-400 text-sm mt-2 line-clamp-2">
                    {sector.description.unwrap_or_default()}
                </p>
            </A>
            {(!sector.sub_industries.is_empty()).then(|| view! {
                <div class="flex flex-wrap gap-2 mt-3 pt-3 border-t border-gray-700">
                    {sector.sub_industries.into_iter().map(|sub| view! {
                        <A
                            href=format!("/companies?industries={}", sub.id)
                            class="bg-gray-700/50 hover:bg-gray-700 text-gray-300 text-xs
                                   px-2 py-0.5 rounded-full transition-colors"
                        >
                            {format!("{} ({})", sub.name, sub.company_count)}
                        </A>
                    }).collect_view()}
                </div>
            })}
        </div>
    }
}
