//! Loading states

use leptos::*;

/// Placeholder while the session resolves
#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center gap-2 p-4 text-sm text-muted-foreground">
            <span class="inline-block loading-spinner w-4 h-4" />
            <span>"Loading..."</span>
        </div>
    }
}

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}
