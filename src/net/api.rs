//! REST API helpers for communicating with the backend.
//!
//! Browser builds (`web` feature): real HTTP calls via `gloo-net`.
//! Native builds: stubs, since these endpoints are only reachable from the
//! browser. Native is also the configuration unit tests run under.
//!
//! ERROR HANDLING
//! ==============
//! Entity fetches return `Option` so a missing or unauthorized backend
//! degrades to an empty view without crashing. The session calls return
//! `Result<_, ApiError>`; how much of that error survives is decided by the
//! session actions in `state::session`, not here.

#![allow(clippy::unused_async)]

use serde::de::DeserializeOwned;

use super::types::{Airline, Flight, Passenger, Rate, Ticket, UserInfo};

/// Failure modes of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),
    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Fetch the current session's user record from `GET /api/user/info/`.
///
/// # Errors
///
/// Returns an error on transport failure, a non-success status, or an
/// undecodable body.
pub async fn fetch_user_info() -> Result<UserInfo, ApiError> {
    #[cfg(feature = "web")]
    {
        let resp = gloo_net::http::Request::get("/api/user/info/")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<UserInfo>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "web"))]
    {
        Err(ApiError::Transport("not available off the browser".to_owned()))
    }
}

/// Submit credentials to `POST /api/user/login/`.
///
/// The response status and body are deliberately not inspected; the session
/// record is refreshed afterwards by `check_login`, which is the sole
/// source of truth for the resulting auth state.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] when the submission itself fails.
pub async fn submit_login(username: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "web")]
    {
        let request = gloo_net::http::Request::post("/api/user/login/")
            .json(&super::types::LoginRequest {
                username: username.to_owned(),
                password: password.to_owned(),
            })
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(())
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = (username, password);
        Err(ApiError::Transport("not available off the browser".to_owned()))
    }
}

/// End the current session via `POST /api/user/logout/`.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success status.
pub async fn submit_logout() -> Result<(), ApiError> {
    #[cfg(feature = "web")]
    {
        let resp = gloo_net::http::Request::post("/api/user/logout/")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "web"))]
    {
        Err(ApiError::Transport("not available off the browser".to_owned()))
    }
}

/// Fetch the airline list from `GET /api/airlines/`.
pub async fn fetch_airlines() -> Option<Vec<Airline>> {
    fetch_list("/api/airlines/").await
}

/// Fetch the flight list from `GET /api/flights/`.
pub async fn fetch_flights() -> Option<Vec<Flight>> {
    fetch_list("/api/flights/").await
}

/// Fetch the current user's passengers from `GET /api/passengers/`.
pub async fn fetch_passengers() -> Option<Vec<Passenger>> {
    fetch_list("/api/passengers/").await
}

/// Fetch the rate list from `GET /api/rates/`.
pub async fn fetch_rates() -> Option<Vec<Rate>> {
    fetch_list("/api/rates/").await
}

/// Fetch the current user's tickets from `GET /api/tickets/`.
pub async fn fetch_tickets() -> Option<Vec<Ticket>> {
    fetch_list("/api/tickets/").await
}

/// Shared GET-a-JSON-list helper. Returns `None` if not reachable, not
/// authorized, or not decodable.
async fn fetch_list<T: DeserializeOwned>(path: &str) -> Option<Vec<T>> {
    #[cfg(feature = "web")]
    {
        let resp = gloo_net::http::Request::get(path).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<T>>().await.ok()
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = path;
        None
    }
}
