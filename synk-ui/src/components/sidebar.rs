//! Dashboard Sidebar
//!
//! Brand header, the two navigation sections and the user button.

use leptos::*;
use leptos_router::*;

use super::icons::IconView;
use super::user_button::DashboardUserButton;
use crate::auth::SessionHandle;
use crate::nav::{entry_classes, is_active, routes, NavEntry, MAIN_SECTION, SECONDARY_SECTION};

#[component]
pub fn Sidebar(session: SessionHandle) -> impl IntoView {
    view! {
        <aside class="w-64 shrink-0 h-screen flex flex-col bg-sidebar text-sidebar-accent-foreground">
            <header>
                <A href=routes::HOME class="flex items-center gap-2 px-2 pt-2">
                    <img src="/logo.svg" height="30" width="30" alt="synk.ai" />
                    <p class="text-3xl text-green-300 font-semibold">"synk.ai"</p>
                </A>
            </header>

            <Separator />

            <nav class="flex-1 flex flex-col">
                <NavSection entries=&MAIN_SECTION />
                <Separator />
                <NavSection entries=&SECONDARY_SECTION />
            </nav>

            <footer class="p-2 text-white">
                <DashboardUserButton session=session />
            </footer>
        </aside>
    }
}

#[component]
fn Separator() -> impl IntoView {
    view! {
        <div class="px-4 py-2">
            <hr class="opacity-10 border-[#5D6B68]" />
        </div>
    }
}

#[component]
fn NavSection(entries: &'static [NavEntry]) -> impl IntoView {
    view! {
        <ul class="flex flex-col gap-1 px-2">
            {entries.iter().map(|entry| view! { <SidebarLink entry=*entry /> }).collect_view()}
        </ul>
    }
}

/// Plain link; the active class is computed from the exact current path
#[component]
fn SidebarLink(entry: NavEntry) -> impl IntoView {
    let location = use_location();
    let active = create_memo(move |_| location.pathname.with(|path| is_active(&entry, path)));

    view! {
        <li>
            <a
                href=entry.href
                class=move || entry_classes(active.get())
                aria-current=move || active.get().then_some("page")
            >
                <IconView icon=entry.icon class="size-5" />
                <span class="text-sm font-medium">{entry.label}</span>
            </a>
        </li>
    }
}
