use super::*;

#[test]
fn dashboard_renders_when_authenticated() {
    assert_eq!(resolve(AppRoute::Dashboard, true), RouteDecision::Render(AppRoute::Dashboard));
}

#[test]
fn dashboard_redirects_to_entry_when_unauthenticated() {
    assert_eq!(resolve(AppRoute::Dashboard, false), RouteDecision::Redirect(AppRoute::Entry));
}

#[test]
fn entry_always_renders() {
    assert_eq!(resolve(AppRoute::Entry, false), RouteDecision::Render(AppRoute::Entry));
    assert_eq!(resolve(AppRoute::Entry, true), RouteDecision::Render(AppRoute::Entry));
}

#[test]
fn decision_follows_session_changes() {
    let mut session = Session::default();
    assert_eq!(
        resolve(AppRoute::Dashboard, session.is_authenticated()),
        RouteDecision::Redirect(AppRoute::Entry)
    );

    session.login();
    assert_eq!(
        resolve(AppRoute::Dashboard, session.is_authenticated()),
        RouteDecision::Render(AppRoute::Dashboard)
    );

    session.logout();
    assert_eq!(
        resolve(AppRoute::Dashboard, session.is_authenticated()),
        RouteDecision::Redirect(AppRoute::Entry)
    );
}

// =============================================================
// redirect_for_path
// =============================================================

#[test]
fn dashboard_path_redirects_when_unauthenticated() {
    assert_eq!(redirect_for_path("/dashboard", false), Some(AppRoute::Entry));
    assert_eq!(redirect_for_path("/dashboard/", false), Some(AppRoute::Entry));
}

#[test]
fn dashboard_path_stays_when_authenticated() {
    assert_eq!(redirect_for_path("/dashboard", true), None);
}

#[test]
fn entry_path_never_redirects() {
    assert_eq!(redirect_for_path("/", false), None);
    assert_eq!(redirect_for_path("/", true), None);
}

#[test]
fn unknown_path_is_left_to_fallback() {
    assert_eq!(redirect_for_path("/nope", false), None);
}

#[test]
fn logout_on_dashboard_yields_single_redirect_to_entry() {
    let mut session = Session::default();
    session.login();
    assert_eq!(redirect_for_path("/dashboard", session.is_authenticated()), None);

    session.logout();
    assert_eq!(redirect_for_path("/dashboard", session.is_authenticated()), Some(AppRoute::Entry));
}
