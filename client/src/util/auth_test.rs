use super::*;

fn signed_in(loading: bool) -> AuthState {
    let user = serde_json::from_value(serde_json::json!({ "id": "u-1", "email": "a@b.com" })).unwrap();
    AuthState { user: Some(user), loading, error: None }
}

#[test]
fn signed_in_visitor_goes_to_dashboard() {
    assert_eq!(signed_in_target(&signed_in(false)), Some("/dashboard"));
}

#[test]
fn no_redirect_while_loading() {
    assert_eq!(signed_in_target(&signed_in(true)), None);
    assert_eq!(signed_in_target(&AuthState::default()), None);
}

#[test]
fn signed_out_visitor_stays() {
    let state = AuthState { user: None, loading: false, error: None };
    assert_eq!(signed_in_target(&state), None);
}
