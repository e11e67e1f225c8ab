//! Sign Up View

use leptos::*;
use leptos_router::*;

use super::auth_card::{follow_redirect, AuthCard, Divider, FormField, SocialButtons};
use crate::auth::{AuthError, SessionHandle, SocialProvider};
use crate::components::{ErrorAlert, InlineLoading};
use crate::forms::{FormState, SignUpForm};
use crate::nav::routes;
use crate::state::notify::Notifications;

pub const SIGN_UP_SUCCESS: &str = "Account created successfully";

/// Where a successful sign-up goes and the notice shown on the way
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignUpDone {
    pub notice: &'static str,
    pub to: &'static str,
}

/// Settle the form with the sign-up result. `None` keeps the view open
/// with the error on display.
pub fn settle_sign_up<T>(form: &mut FormState<SignUpForm>, result: &Result<T, AuthError>) -> Option<SignUpDone> {
    form.settle(result).then_some(SignUpDone {
        notice: SIGN_UP_SUCCESS,
        to: routes::HOME,
    })
}

#[component]
pub fn SignUpView(session: SessionHandle) -> impl IntoView {
    let form = create_rw_signal(FormState::<SignUpForm>::default());
    let navigate = use_navigate();
    let notify = use_context::<Notifications>().expect("Notifications not provided");

    let pending = Signal::derive(move || form.with(FormState::is_pending));
    let error = Signal::derive(move || form.with(|f| f.error().map(str::to_string)));
    let field_error = move |field: &'static str| {
        Signal::derive(move || form.with(|f| f.field_error(field).map(str::to_string)))
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(details) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };

        let store = session.store();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = store
                .sign_up_email(&details.email, &details.name, &details.password)
                .await;
            if let Some(done) = form.try_update(|f| settle_sign_up(f, &result)).flatten() {
                notify.show_success(done.notice);
                navigate(done.to, NavigateOptions::default());
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
                        <h1 class="text-3xl text-green-900/90 mb-2 font-bold">"Let's get started"</h1>
                        <p class="text-muted-foreground text-balance">"Create your account"</p>
                    </div>

                    <FormField
                        label="Name"
                        placeholder="John Doe"
                        value=Signal::derive(move || form.with(|f| f.values().name.clone()))
                        error=field_error("name")
                        on_input=move |v| form.update(|f| f.edit(|values| values.name = v))
                    />

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

                    <FormField
                        label="Confirm Password"
                        input_type="password"
                        placeholder="********"
                        value=Signal::derive(move || form.with(|f| f.values().confirm_password.clone()))
                        error=field_error("confirm_password")
                        on_input=move |v| form.update(|f| f.edit(|values| values.confirm_password = v))
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
                        "Sign up"
                    </button>

                    <Divider />

                    <SocialButtons pending=pending on_select=on_social />

                    <div class="text-center text-sm">
                        "Already have an account? "
                        <A href=routes::SIGN_IN class="underline underline-offset-4 font-semibold text-green-900/90">
                            "Sign in"
                        </A>
                    </div>
                </div>
            </form>
        </AuthCard>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::mock::MockAuthClient;
    use crate::auth::SessionStore;
    use futures::executor::block_on;
    use std::rc::Rc;

    fn filled_form() -> FormState<SignUpForm> {
        FormState::new(SignUpForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "secret".into(),
            confirm_password: "secret".into(),
        })
    }

    #[test]
    fn test_success_notifies_and_goes_home() {
        let store = SessionStore::new(Rc::new(MockAuthClient::default()));
        let mut form = filled_form();

        let details = form.begin_submit().unwrap();
        let result = block_on(store.sign_up_email(&details.email, &details.name, &details.password));

        let done = settle_sign_up(&mut form, &result).expect("sign-up succeeded");
        assert_eq!(done.notice, "Account created successfully");
        assert_eq!(done.to, routes::HOME);
        assert_eq!(form.error(), None);
        assert!(!form.is_pending());
    }

    #[test]
    fn test_rejection_stays_with_message() {
        let mock = Rc::new(MockAuthClient::default());
        mock.reject_sign_up("User already exists");
        let store = SessionStore::new(mock);
        let mut form = filled_form();

        let details = form.begin_submit().unwrap();
        let result = block_on(store.sign_up_email(&details.email, &details.name, &details.password));

        assert_eq!(settle_sign_up(&mut form, &result), None);
        assert_eq!(form.error(), Some("User already exists"));
    }
}
