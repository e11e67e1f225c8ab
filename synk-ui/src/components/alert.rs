use leptos::*;

use super::icons::{Icon, IconView};

/// Destructive alert showing an auth error verbatim
#[component]
pub fn ErrorAlert(
    #[prop(into)]
    message: Signal<Option<String>>,
) -> impl IntoView {
    move || {
        message.get().map(|text| view! {
            <div
                role="alert"
                class="flex items-center gap-2 rounded-lg border-none bg-destructive/10 px-4 py-3 text-sm text-destructive"
            >
                <IconView icon=Icon::AlertCircle class="size-4 shrink-0" />
                <span class="alert-title">{text}</span>
            </div>
        })
    }
}
