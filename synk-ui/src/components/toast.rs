//! Toast Notification Component
//!
//! Shows success and error messages.

use leptos::*;

use crate::state::notify::Notifications;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let notify = use_context::<Notifications>().expect("Notifications not provided");

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2">
            {move || {
                notify.success.get().map(|msg| view! {
                    <ToastMessage message=msg variant=ToastVariant::Success />
                })
            }}

            {move || {
                notify.error.get().map(|msg| view! {
                    <ToastMessage message=msg variant=ToastVariant::Error />
                })
            }}
        </div>
    }
}

#[derive(Clone, Copy)]
enum ToastVariant {
    Success,
    Error,
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    variant: ToastVariant,
) -> impl IntoView {
    let (icon, class) = match variant {
        ToastVariant::Success => ("✓", "bg-white text-gray-900 border-gray-200"),
        ToastVariant::Error => ("✕", "bg-white text-red-600 border-red-200"),
    };

    view! {
        <div
            role="status"
            class=format!(
                "flex items-center gap-3 border {} px-4 py-3 rounded-lg shadow-lg \
                 transition-all duration-300 ease-out",
                class
            )
        >
            <span class="text-sm">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}
