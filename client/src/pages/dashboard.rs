//! Session-gated dashboard page.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::Session;
use crate::util::auth::{RouteDecision, install_unauth_redirect, resolve};
use crate::util::route::AppRoute;

/// Dashboard page. Redirects to `/` if the session is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    install_unauth_redirect(session, use_location().pathname, use_navigate());

    let allowed = move || {
        matches!(
            resolve(AppRoute::Dashboard, session.get().is_authenticated()),
            RouteDecision::Render(_)
        )
    };

    view! {
        <div class="dashboard-container">
            <Show when=allowed>
                <DashboardCard session=session/>
            </Show>
        </div>
    }
}

/// Welcome card with the single log-out control.
///
/// Logging out only clears the session; the route guard installed by
/// `DashboardPage` performs the navigation back to `/`.
#[component]
fn DashboardCard(session: RwSignal<Session>) -> impl IntoView {
    let on_logout = move |_| session.update(Session::logout);

    view! {
        <div class="dashboard-card">
            <h2 class="dashboard-title">"Welcome to the dashboard!"</h2>
            <div class="dashboard-content">
                <p>"You have successfully logged in to your account."</p>
                <p>"This is your personal dashboard area."</p>
            </div>
            <button class="logout-button" on:click=on_logout>
                "Log out"
            </button>
        </div>
    }
}
