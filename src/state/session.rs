//! Session store actions: check, login, logout.
//!
//! The store is an `RwSignal<UserInfo>` created once in `app.rs` and
//! shared via context. Every action replaces the record whole; the server's
//! last successful answer is the only source of truth, and any failed check
//! presents the application as logged out.
//!
//! Actions do not guard against overlapping invocations. Each one is a
//! single request/response on the browser event loop; when two interleave,
//! the last writer wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::{self, ApiError};
use crate::net::types::UserInfo;

/// Refresh the session record from `GET /api/user/info/`.
///
/// Failures never escape: transport errors, non-success statuses, and
/// undecodable bodies all leave the record at its logged-out default.
pub async fn check_login(user_info: RwSignal<UserInfo>) {
    let next = resolve_user_info(api::fetch_user_info().await);
    user_info.set(next);
}

/// Log in with the given credentials, then refresh the record.
///
/// # Errors
///
/// A failed credential submission propagates to the caller and the refresh
/// is skipped. The submission's HTTP response itself is never inspected;
/// whatever it said, the subsequent [`check_login`] decides the auth state.
pub async fn login(
    user_info: RwSignal<UserInfo>,
    username: &str,
    password: &str,
) -> Result<(), ApiError> {
    login_flow(
        api::submit_login(username, password),
        check_login(user_info),
    )
    .await
}

/// End the session. The record is reset to logged-out whether or not the
/// network call succeeded; a failure is logged and swallowed.
pub async fn logout(user_info: RwSignal<UserInfo>) {
    let outcome = api::submit_logout().await;
    finish_logout(user_info, outcome);
}

/// The server's answer wins; any failure means logged out.
fn resolve_user_info(fetched: Result<UserInfo, ApiError>) -> UserInfo {
    fetched.unwrap_or_default()
}

/// Submission first, refresh second. Kept free of I/O so the ordering
/// contract is testable off the browser.
async fn login_flow<S, R>(submit: S, refresh: R) -> Result<(), ApiError>
where
    S: Future<Output = Result<(), ApiError>>,
    R: Future<Output = ()>,
{
    submit.await?;
    refresh.await;
    Ok(())
}

fn finish_logout(user_info: RwSignal<UserInfo>, outcome: Result<(), ApiError>) {
    if let Err(err) = outcome {
        log::error!("logout request failed: {err}");
    }
    user_info.set(UserInfo::default());
}
