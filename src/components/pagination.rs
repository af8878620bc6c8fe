//! Pagination Component
//!
//! Page-number pagination matching the server's fixed page size.

use leptos::*;

#[component]
pub fn Pagination(
    #[prop(into)]
    page: Signal<u64>,
    #[prop(into)]
    total_pages: Signal<u64>,
    #[prop(into)]
    on_page: Callback<u64>,
) -> impl IntoView {
    view! {
        {move || {
            if total_pages.get() <= 1 {
                return ().into_view();
            }
            view! {
                <div class="flex items-center justify-center space-x-4 py-4">
                    <button
                        disabled=move || page.get() <= 1
                        on:click=move |_| on_page.call(page.get().saturating_sub(1).max(1))
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 disabled:bg-gray-800
                               disabled:text-gray-600 rounded-lg font-medium transition-colors"
                    >
                        "Previous"
                    </button>
                    <span class="text-gray-400 text-sm">
                        {move || format!("Page {} of {}", page.get(), total_pages.get())}
                    </span>
                    <button
                        disabled=move || page.get() >= total_pages.get()
                        on:click=move |_| on_page.call((page.get() + 1).min(total_pages.get()))
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 disabled:bg-gray-800
                               disabled:text-gray-600 rounded-lg font-medium transition-colors"
                    >
                        "Next"
                    </button>
                </div>
            }.into_view()
        }}
    }
}
