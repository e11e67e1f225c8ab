//! Quick-auth page at `/welcome`: bare inputs, two buttons and browser
//! alerts for feedback.

use leptos::*;

use crate::auth::{SessionHandle, SessionStore};

const SUCCESS_ALERT: &str = "Success!";
const FAILURE_ALERT: &str = "Something went wrong!";

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn report<T, E: std::fmt::Display>(action: &str, result: Result<T, E>) {
    match result {
        Ok(_) => alert(SUCCESS_ALERT),
        Err(e) => {
            log::warn!("{} failed: {}", action, e);
            alert(FAILURE_ALERT);
        }
    }
}

#[component]
pub fn LandingView(session: SessionHandle) -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (name, set_name) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let run = move |action: &'static str, sign_up: bool| {
        let store: SessionStore = session.store();
        let (email, name, password) = (email.get_untracked(), name.get_untracked(), password.get_untracked());
        spawn_local(async move {
            if sign_up {
                report(action, store.sign_up_email(&email, &name, &password).await);
            } else {
                report(action, store.sign_in_email(&email, &password).await);
            }
        });
    };

    let sign_out = move |_: ev::MouseEvent| {
        let store = session.store();
        spawn_local(async move {
            if let Err(e) = store.sign_out().await {
                log::warn!("Sign-out failed: {}", e);
            }
        });
    };

    move || match session.user() {
        Some(user) => view! {
            <div class="flex flex-col p-4 gap-y-4">
                <p>"Logged in as " {user.name}</p>
                <button type="button" class="rounded-md bg-primary px-4 py-2 text-primary-foreground" on:click=sign_out>
                    "Sign out"
                </button>
            </div>
        }
        .into_view(),
        None => view! {
            <div class="p-4 flex flex-col gap-y-10">
                <div class="p-4 flex flex-col gap-y-4">
                    <input
                        class="h-9 rounded-md border px-3"
                        placeholder="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <input
                        class="h-9 rounded-md border px-3"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="rounded-md bg-primary px-4 py-2 text-primary-foreground"
                        on:click=move |_| run("Sign-in", false)
                    >
                        "Login"
                    </button>
                </div>
                <div class="flex flex-col gap-y-4">
                    <input
                        class="h-9 rounded-md border px-3"
                        placeholder="name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <input
                        class="h-9 rounded-md border px-3"
                        placeholder="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <input
                        class="h-9 rounded-md border px-3"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="rounded-md bg-primary px-4 py-2 text-primary-foreground"
                        on:click=move |_| run("Sign-up", true)
                    >
                        "Create User"
                    </button>
                </div>
            </div>
        }
        .into_view(),
    }
}
