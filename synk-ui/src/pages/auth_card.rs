//! Pieces shared by the sign-in and sign-up views.

use leptos::*;

use crate::auth::SocialProvider;
use crate::components::{Icon, IconView};

fn provider_icon(provider: SocialProvider) -> Icon {
    match provider {
        SocialProvider::Google => Icon::Google,
        SocialProvider::Github => Icon::Github,
    }
}

/// Two-column card: the form on the left, the brand panel on the right
#[component]
pub fn AuthCard(children: Children) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-6 text-green-700">
            <div class="overflow-hidden rounded-xl border bg-card shadow-sm">
                <div class="grid md:grid-cols-2">
                    {children()}
                    <div class="bg-radial from-sidebar-accent to-sidebar relative hidden md:flex gap-y-4 items-center justify-center">
                        <img src="/logo.svg" alt="logo" class="h-[102px] w-[102px] pe-5" />
                        <p class="text-5xl text-green-300 font-semibold">"synk.ai"</p>
                    </div>
                </div>
            </div>
            <div class="text-muted-foreground text-center text-xs text-balance">
                "By clicking continue, you agree to our "
                <a href="#" class="underline underline-offset-4 hover:text-primary">"Terms of services"</a>
                " and "
                <a href="#" class="underline underline-offset-4 hover:text-primary">"Privacy policy"</a>
            </div>
        </div>
    }
}

#[component]
pub fn FormField(
    label: &'static str,
    #[prop(default = "text")]
    input_type: &'static str,
    placeholder: &'static str,
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    error: Signal<Option<String>>,
    on_input: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <div class="grid gap-3 text-green-900/90">
            <label class="text-sm font-medium">{label}</label>
            <input
                type=input_type
                placeholder=placeholder
                class="h-9 w-full rounded-md border border-green-900/90 bg-transparent px-3 py-1 text-sm shadow-xs outline-none"
                prop:value=move || value.get()
                on:input=move |ev| on_input(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! { <p class="text-sm text-destructive">{msg}</p> })}
        </div>
    }
}

/// "or" divider above the provider buttons
#[component]
pub fn Divider() -> impl IntoView {
    view! {
        <div class="relative text-center text-sm">
            <div class="absolute inset-0 top-1/2 border-t border-border" />
            <span class="bg-card text-green-900 relative z-10 px-2">"or"</span>
        </div>
    }
}

#[component]
pub fn SocialButtons(
    #[prop(into)]
    pending: Signal<bool>,
    on_select: impl Fn(SocialProvider) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 gap-4">
            {SocialProvider::ALL.into_iter().map(|provider| view! {
                <button
                    type="button"
                    class="w-full inline-flex items-center justify-center gap-2 rounded-md px-4 py-2 text-sm \
                           cursor-pointer border-2 border-green-900/90 text-green-900/90 disabled:opacity-50"
                    disabled=move || pending.get()
                    on:click=move |_| on_select(provider)
                >
                    <IconView icon=provider_icon(provider) />
                    {format!("Log in with {}", provider.display_name())}
                </button>
            }).collect_view()}
        </div>
    }
}

/// Send the browser to a provider's consent page
pub fn follow_redirect(url: &str) {
    match web_sys::window().map(|w| w.location().set_href(url)) {
        Some(Ok(())) => {}
        _ => log::error!("Could not follow provider redirect"),
    }
}
