//! Home View
//!
//! Greets the signed-in user. Renders a placeholder until the session
//! resolves and sends anonymous visitors to sign-in.

use leptos::*;
use leptos_router::*;

use crate::auth::{use_sign_out, SessionHandle, SessionState};
use crate::components::LoadingPlaceholder;
use crate::nav::routes;

/// Where Home sends the visitor for a given session state, if anywhere
pub fn redirect_for(state: &SessionState) -> Option<&'static str> {
    state.is_anonymous().then_some(routes::SIGN_IN)
}

#[component]
pub fn HomeView(session: SessionHandle) -> impl IntoView {
    let navigate = use_navigate();
    let sign_out = use_sign_out(session);

    create_effect(move |_| {
        if let Some(to) = session.state().with(redirect_for) {
            navigate(
                to,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    move || match session.user() {
        Some(user) => view! {
            <div class="flex flex-col gap-y-4 items-center p-10">
                <p>"Logged in as " {user.name}</p>
                <button
                    type="button"
                    class="w-full max-w-sm rounded-md bg-primary px-4 py-2 text-sm font-medium \
                           text-primary-foreground cursor-pointer disabled:opacity-50"
                    disabled=move || sign_out.pending().get()
                    on:click=move |_| sign_out.dispatch(())
                >
                    "Sign out"
                </button>
            </div>
        }
        .into_view(),
        None => view! { <LoadingPlaceholder /> }.into_view(),
    }
}
