use super::*;

#[test]
fn verify_accepts_exact_demo_pair() {
    let creds = Credentials { email: DEMO_EMAIL, password: DEMO_PASSWORD };
    assert_eq!(verify(&creds), Ok(()));
}

#[test]
fn verify_rejects_wrong_password() {
    let creds = Credentials { email: "test@example.com", password: "Wrong1!" };
    assert_eq!(verify(&creds), Err(FieldError::InvalidCredentials));
}

#[test]
fn verify_rejects_wrong_email() {
    let creds = Credentials { email: "other@example.com", password: "123456A*" };
    assert_eq!(verify(&creds), Err(FieldError::InvalidCredentials));
}

#[test]
fn verify_is_exact_not_normalized() {
    for (email, password) in [
        ("TEST@example.com", "123456A*"),
        (" test@example.com", "123456A*"),
        ("test@example.com", "123456a*"),
        ("test@example.com", "123456A* "),
    ] {
        let creds = Credentials { email, password };
        assert_eq!(verify(&creds), Err(FieldError::InvalidCredentials), "expected {creds:?} to fail");
    }
}

#[test]
fn debug_output_redacts_password() {
    let creds = Credentials { email: DEMO_EMAIL, password: DEMO_PASSWORD };
    let rendered = format!("{creds:?}");
    assert!(rendered.contains(DEMO_EMAIL));
    assert!(!rendered.contains(DEMO_PASSWORD));
}
