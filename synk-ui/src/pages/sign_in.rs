//! Sign In View
//!
//! Email/password form plus provider buttons. Success navigates home; a
//! rejection is shown verbatim and the view stays put.

use leptos::*;
use leptos_router::*;

use super::auth_card::{follow_redirect, AuthCard, Divider, FormField, SocialButtons};
use crate::auth::{SessionHandle, SocialProvider};
use crate::components::{ErrorAlert, InlineLoading};
use crate::forms::{FormState, SignInForm};
use crate::nav::routes;

#[component]
pub fn SignInView(session: SessionHandle) -> impl IntoView {
    let form = create_rw_signal(FormState::<SignInForm>::default());
    let navigate = use_navigate();

    let pending = Signal::derive(move || form.with(FormState::is_pending));
    let error = Signal::derive(move || form.with(|f| f.error().map(str::to_string)));
    let field_error = move |field: &'static str| {
        Signal::derive(move || form.with(|f| f.field_error(field).map(str::to_string)))
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(creds) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };

        let store = session.store();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = store.sign_in_email(&creds.email, &creds.password).await;
            if form.try_update(|f| f.settle(&result)).unwrap_or(false) {
                navigate(routes::HOME, NavigateOptions::default());
            }
        });
    };

    let on_social = move |provider: SocialProvider| {
        if !form.try_update(|f| f.begin_action()).unwrap_or(false) {
            return;
        }
        let store = session.store();
        spawn_local(async move {
            let result = store.sign_in_social(provider).await;
            form.try_update(|f| f.settle(&result));
            if let Ok(url) = result {
                follow_redirect(&url);
            }
        });
    };

    view! {
        <AuthCard>
            <form on:submit=on_submit class="p-6 md:p-8" novalidate=true>
                <div class="flex flex-col gap-6">
                    <div class="flex flex-col items-center text-center">
                        <h1 class="text-3xl text-green-900/90 mb-2 font-bold">"Log in"</h1>
                        <p class="text-muted-foreground text-balance">"Login to your account!"</p>
                    </div>

                    <FormField
                        label="Email"
                        input_type="email"
                        placeholder="hello@example.com"
                        value=Signal::derive(move || form.with(|f| f.values().email.clone()))
                        error=field_error("email")
                        on_input=move |v| form.update(|f| f.edit(|values| values.email = v))
                    />

                    <FormField
                        label="Password"
                        input_type="password"
                        placeholder="********"
                        value=Signal::derive(move || form.with(|f| f.values().password.clone()))
                        error=field_error("password")
                        on_input=move |v| form.update(|f| f.edit(|values| values.password = v))
                    />

                    <ErrorAlert message=error />

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full inline-flex items-center justify-center gap-2 rounded-md bg-primary px-4 py-2 \
                               text-sm font-medium text-primary-foreground cursor-pointer disabled:opacity-50"
                    >
                        <Show when=move || pending.get()>
                            <InlineLoading />
                        </Show>
                        "Log in"
                    </button>

                    <Divider />

                    <SocialButtons pending=pending on_select=on_social />

                    <div class="text-center text-sm">
                        "Don't have an account? "
                        <A href=routes::SIGN_UP class="underline underline-offset-4 font-semibold text-green-900/90">
                            "Sign up"
                        </A>
                    </div>
                </div>
            </form>
        </AuthCard>
    }
}
