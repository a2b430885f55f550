//! Route guard shared by session-aware pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gated pages must apply identical unauthenticated redirect behavior. The
//! decision itself is a pure function of the requested route and the current
//! session flag, re-evaluated whenever either changes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::Session;
use crate::util::route::AppRoute;

/// Outcome of a navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render(AppRoute),
    Redirect(AppRoute),
}

/// Decide whether `requested` may render for the given session flag.
pub fn resolve(requested: AppRoute, authenticated: bool) -> RouteDecision {
    if !requested.is_gated() || authenticated {
        RouteDecision::Render(requested)
    } else {
        RouteDecision::Redirect(AppRoute::Entry)
    }
}

/// Redirect target for a location path, if the route there may not render.
///
/// Paths outside the route table are left to the router fallback.
pub fn redirect_for_path(path: &str, authenticated: bool) -> Option<AppRoute> {
    match resolve(AppRoute::from_path(path)?, authenticated) {
        RouteDecision::Render(_) => None,
        RouteDecision::Redirect(target) => Some(target),
    }
}

/// Redirect away from the current location whenever its route requires a
/// session the user does not have. Re-runs on every navigation and every
/// session change, so logging out from a gated page also lands on `/`.
pub fn install_unauth_redirect<F>(session: RwSignal<Session>, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let path = pathname.get();
        if let Some(target) = redirect_for_path(&path, session.get().is_authenticated()) {
            log::debug!("route guard: {path} -> {}", target.path());
            navigate(target.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
