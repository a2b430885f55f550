use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_default_is_unauthenticated() {
    let session = Session::default();
    assert!(!session.is_authenticated());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn login_authenticates() {
    let mut session = Session::default();
    session.login();
    assert!(session.is_authenticated());
}

#[test]
fn login_twice_matches_login_once() {
    let mut once = Session::default();
    once.login();
    let mut twice = Session::default();
    twice.login();
    twice.login();
    assert_eq!(once, twice);
}

#[test]
fn logout_after_login_clears_flag() {
    let mut session = Session::default();
    session.login();
    session.logout();
    assert!(!session.is_authenticated());
}

#[test]
fn logout_when_unauthenticated_stays_unauthenticated() {
    let mut session = Session::default();
    session.logout();
    assert!(!session.is_authenticated());
    assert_eq!(session, Session::default());
}

#[test]
fn flag_tracks_last_transition() {
    let mut session = Session::default();
    for _ in 0..3 {
        session.login();
        assert!(session.is_authenticated());
        session.logout();
        assert!(!session.is_authenticated());
    }
    session.login();
    assert!(session.is_authenticated());
}
