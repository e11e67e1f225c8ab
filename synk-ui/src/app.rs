//! App Root Component
//!
//! Creates the session store and notifications, then routes between the
//! auth views, the quick-auth page and the dashboard.

use leptos::*;
use leptos_router::*;
use std::rc::Rc;

use crate::auth::{HttpAuthClient, SessionHandle, SessionStore};
use crate::components::Toast;
use crate::layouts::{AuthLayout, DashboardLayout};
use crate::nav::routes;
use crate::pages::{AgentsView, HomeView, LandingView, MeetingsView, SignInView, SignUpView, UpgradeView};
use crate::state::provide_notifications;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_notifications();

    let store = SessionStore::new(Rc::new(HttpAuthClient::from_config()));
    let session = SessionHandle::new(store);
    session.start();

    view! {
        <Router>
            <Routes>
                <Route path="/auth" view=AuthLayout>
                    <Route path="sign-in" view=move || view! { <SignInView session=session /> } />
                    <Route path="sign-up" view=move || view! { <SignUpView session=session /> } />
                </Route>
                <Route path=routes::WELCOME view=move || view! { <LandingView session=session /> } />
                <Route path="/" view=move || view! { <DashboardLayout session=session /> }>
                    <Route path="" view=move || view! { <HomeView session=session /> } />
                    <Route path="meetings" view=MeetingsView />
                    <Route path="agents" view=AgentsView />
                    <Route path="upgrade" view=UpgradeView />
                </Route>
                <Route path="/*any" view=NotFound />
            </Routes>
        </Router>
        <Toast />
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="bg-muted flex flex-col items-center justify-center min-h-svh text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-muted-foreground mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=routes::HOME
                class="px-6 py-3 rounded-lg bg-primary text-primary-foreground font-medium"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
