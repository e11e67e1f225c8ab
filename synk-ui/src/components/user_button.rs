//! Sidebar footer: the signed-in user and a sign-out menu.

use leptos::*;

use super::icons::{Icon, IconView};
use crate::auth::{use_sign_out, SessionHandle};

/// First letter of the name, for the avatar fallback
pub fn initials(name: &str) -> String {
    name.chars()
        .find(|c| !c.is_whitespace())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[component]
pub fn DashboardUserButton(session: SessionHandle) -> impl IntoView {
    let (open, set_open) = create_signal(false);
    let sign_out = use_sign_out(session);

    move || {
        session.user().map(|user| {
            let avatar = match user.image.clone() {
                Some(src) => view! {
                    <img src=src alt=user.name.clone() class="size-9 rounded-full object-cover" />
                }
                .into_view(),
                None => view! {
                    <span class="size-9 rounded-full bg-green-700 flex items-center justify-center font-semibold">
                        {initials(&user.name)}
                    </span>
                }
                .into_view(),
            };

            view! {
                <div class="relative">
                    <button
                        type="button"
                        class="w-full rounded-lg border border-border/10 p-3 flex items-center gap-2 \
                               bg-white/5 hover:bg-white/10 overflow-hidden"
                        on:click=move |_| set_open.update(|o| *o = !*o)
                    >
                        {avatar}
                        <div class="flex flex-col gap-0.5 text-left overflow-hidden flex-1 min-w-0">
                            <p class="text-sm truncate w-full">{user.name.clone()}</p>
                            <p class="text-xs truncate w-full">{user.email.clone()}</p>
                        </div>
                        <IconView icon=Icon::ChevronDown class="size-4 shrink-0" />
                    </button>

                    <Show when=move || open.get()>
                        <div class="absolute bottom-full mb-2 w-full rounded-lg bg-white text-gray-900 shadow-lg p-1">
                            <button
                                type="button"
                                class="w-full flex items-center justify-between px-3 py-2 text-sm rounded-md hover:bg-gray-100 \
                                       disabled:opacity-50"
                                disabled=move || sign_out.pending().get()
                                on:click=move |_| {
                                    set_open.set(false);
                                    sign_out.dispatch(());
                                }
                            >
                                "Logout"
                                <IconView icon=Icon::LogOut class="size-4" />
                            </button>
                        </div>
                    </Show>
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("ada lovelace"), "A");
        assert_eq!(initials("  émile"), "É");
        assert_eq!(initials(""), "");
    }
}
