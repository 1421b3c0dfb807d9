use std::cell::Cell;

use futures::executor::block_on;

use super::*;

fn authed(name: &str) -> UserInfo {
    serde_json::from_value(serde_json::json!({
        "is_authenticated": true,
        "name": name
    }))
    .expect("user info")
}

// =============================================================
// check_login transitions
// =============================================================

#[test]
fn successful_check_replaces_record_verbatim() {
    let fetched = authed("X");
    assert_eq!(resolve_user_info(Ok(fetched.clone())), fetched);
}

#[test]
fn failed_check_resets_record() {
    let transport = ApiError::Transport("connection refused".to_owned());
    assert_eq!(resolve_user_info(Err(transport)), UserInfo::default());
    assert_eq!(resolve_user_info(Err(ApiError::Status(403))), UserInfo::default());
}

#[test]
fn check_login_discards_prior_state_on_failure() {
    // Native builds have no transport, so the fetch always fails; the
    // previously authenticated record must not survive it.
    let user_info = RwSignal::new(authed("X"));
    block_on(check_login(user_info));
    assert_eq!(user_info.get_untracked(), UserInfo::default());
}

// =============================================================
// login ordering
// =============================================================

#[test]
fn login_refreshes_after_submission() {
    let refreshed = Cell::new(false);
    let result = block_on(login_flow(async { Ok(()) }, async {
        refreshed.set(true);
    }));
    assert!(result.is_ok());
    assert!(refreshed.get());
}

#[test]
fn failed_submission_propagates_and_skips_refresh() {
    let refreshed = Cell::new(false);
    let result = block_on(login_flow(
        async { Err(ApiError::Transport("connection refused".to_owned())) },
        async { refreshed.set(true) },
    ));
    assert_eq!(
        result,
        Err(ApiError::Transport("connection refused".to_owned()))
    );
    assert!(!refreshed.get());
}

#[test]
fn login_leaves_record_untouched_when_submission_fails() {
    let user_info = RwSignal::new(authed("X"));
    let result = block_on(login(user_info, "u", "p"));
    assert!(result.is_err());
    assert_eq!(user_info.get_untracked(), authed("X"));
}

// =============================================================
// logout always resets
// =============================================================

#[test]
fn logout_resets_on_success() {
    let user_info = RwSignal::new(authed("X"));
    finish_logout(user_info, Ok(()));
    assert_eq!(user_info.get_untracked(), UserInfo::default());
}

#[test]
fn logout_resets_on_failure() {
    let user_info = RwSignal::new(authed("X"));
    finish_logout(user_info, Err(ApiError::Status(500)));
    assert_eq!(user_info.get_untracked(), UserInfo::default());
}

#[test]
fn logout_action_settles_logged_out() {
    let user_info = RwSignal::new(authed("X"));
    block_on(logout(user_info));
    assert_eq!(user_info.get_untracked(), UserInfo::default());
}
