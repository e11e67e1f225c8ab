//! Reactive bridge between [`SessionStore`] and Leptos views.

use chrono::Utc;
use gloo_timers::callback::Interval;
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

use super::session::{SessionState, SessionStore, User};
use crate::nav::routes;
use crate::state::notify::Notifications;

/// How often an authenticated session is checked against `expires_at`
const EXPIRY_CHECK_MS: u32 = 60_000;

/// Read handle passed to layouts and views as a prop
#[derive(Clone, Copy)]
pub struct SessionHandle {
    store: StoredValue<SessionStore>,
    state: ReadSignal<SessionState>,
}

impl SessionHandle {
    /// Mirror `store` into a signal for the lifetime of the current owner.
    pub fn new(store: SessionStore) -> Self {
        let (state, set_state) = create_signal(store.snapshot());
        let id = store.subscribe(move |s| set_state.set(s.clone()));

        let subscribed = store.clone();
        on_cleanup(move || subscribed.unsubscribe(id));

        Self {
            store: store_value(store),
            state,
        }
    }

    /// Resolve the initial session and start the expiry tick.
    pub fn start(&self) {
        let store = self.store();
        spawn_local(async move {
            // failures are already logged and resolve Pending to Anonymous
            let _ = store.refresh().await;
        });

        let store = self.store();
        let ticker = Interval::new(EXPIRY_CHECK_MS, move || {
            store.expire_if_due(Utc::now());
        });
        on_cleanup(move || drop(ticker));
    }

    pub fn store(&self) -> SessionStore {
        self.store.get_value()
    }

    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state
    }

    /// Current user, tracked
    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user().cloned())
    }
}

/// Sign-out action shared by the home view and the sidebar user button:
/// on success navigate to sign-in, otherwise raise an error toast.
pub fn use_sign_out(session: SessionHandle) -> Action<(), ()> {
    let navigate = use_navigate();
    let notify = use_context::<Notifications>();

    create_action(move |_: &()| {
        let store = session.store();
        let navigate = navigate.clone();
        async move {
            match store.sign_out().await {
                Ok(()) => navigate(routes::SIGN_IN, NavigateOptions::default()),
                Err(e) => {
                    log::warn!("Sign-out failed: {}", e);
                    if let Some(notify) = notify {
                        notify.show_error(&e.message());
                    }
                }
            }
        }
    })
}
