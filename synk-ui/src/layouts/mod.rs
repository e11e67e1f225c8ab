//! Route layouts wrapping nested views.

use leptos::*;
use leptos_router::*;

use crate::auth::SessionHandle;
use crate::components::Sidebar;

/// Centers the auth views on a muted background
#[component]
pub fn AuthLayout() -> impl IntoView {
    view! {
        <div class="bg-muted flex flex-col items-center justify-center min-h-svh p-6 md:p-10">
            <div class="w-full max-w-sm md:max-w-4xl">
                <Outlet />
            </div>
        </div>
    }
}

/// Persistent sidebar next to the routed content
#[component]
pub fn DashboardLayout(session: SessionHandle) -> impl IntoView {
    view! {
        <div class="flex min-h-screen w-screen">
            <Sidebar session=session />
            <main class="flex flex-col h-screen flex-1 bg-muted overflow-y-auto">
                <Outlet />
            </main>
        </div>
    }
}
