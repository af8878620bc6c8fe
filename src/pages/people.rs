//! People Page
//!
//! Founders, executives, and operators across the directory.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::models::Person;
use crate::api::Page;
use crate::components::{ListSkeleton, LoadError, Pagination, SearchBar};
use crate::state::{FilterQuery, RequestSequence, PAGE_SIZE};

#[component]
pub fn People() -> impl IntoView {
    let search = use_location().search;

    let (page_data, set_page_data) = create_signal(Page::<Person>::default());
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
            let result = api::people::list(&query).await;
            if !ticket.is_current() {
                return;
            }
            match result {
                Ok(page) => {
                    set_page_data.set(page);
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load people: {}", e).into());
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
            navigate(&format!("/people?{}", qs), Default::default());
        }
    };
    let go_to_page = move |page: u64| {
        let mut query = FilterQuery::parse(&search.get_untracked());
        query.set_page(page);
        navigate(
            &format!("/people?{}", query.to_query_string()),
            Default::default(),
        );
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"People"</h1>
                <p class="text-gray-400 mt-1">
                    {move || format!("{} founders and operators", page_data.get().count)}
                </p>
            </div>

            <SearchBar draft=draft on_apply=apply placeholder="Search people..." />

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
                            <p class="text-gray-400">"No people found."</p>
                        </div>
                    }.into_view();
                }
                view! {
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                        {page.items.into_iter().map(|person| view! {
                            <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
                                <h3 class="font-semibold">{person.name}</h3>
                                <p class="text-gray-400 text-sm">
                                    {person.title.unwrap_or_default()}
                                </p>
                                {person.company_name.map(|company| view! {
                                    <p class="text-gray-500 text-sm mt-1">{company}</p>
                                })}
                                <p class="text-gray-400 text-sm mt-2 line-clamp-3">
                                    {person.bio.unwrap_or_default()}
                                </p>
                                {person.linkedin_url.map(|url| view! {
                                    <a
                                        href=url
                                        target="_blank"
                                        rel="noopener"
                                        class="inline-block text-primary-400 hover:text-primary-300
                                               text-sm mt-2"
                                    >
                                        "LinkedIn"
                                    </a>
                                })}
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
