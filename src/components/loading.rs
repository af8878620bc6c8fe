//! Loading and Error States
//!
//! Spinners, skeletons, and the failed-to-load notice with its retry button.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Skeleton loader for cards
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 animate-pulse">
            <div class="h-4 bg-gray-700 rounded w-1/3 mb-4" />
            <div class="h-8 bg-gray-700 rounded w-1/2 mb-2" />
            <div class="h-4 bg-gray-700 rounded w-2/3" />
        </div>
    }
}

/// Skeleton loader for list items
#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-700 rounded h-12" />
            }).collect_view()}
        </div>
    }
}

/// Failed-to-load notice with a manual retry button
#[component]
pub fn LoadError(
    #[prop(into)]
    message: String,
    #[prop(into)]
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="bg-red-900/30 border border-red-700 rounded-xl p-6 text-center">
            <p class="text-red-300 mb-4">{message}</p>
            <button
                on:click=move |_| on_retry.call(())
                class="px-4 py-2 bg-red-700 hover:bg-red-600 rounded-lg font-medium transition-colors"
            >
                "Try Again"
            </button>
        </div>
    }
}
