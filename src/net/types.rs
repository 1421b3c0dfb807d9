//! Wire records exchanged with the REST backend.
//!
//! Entity records mirror the backend serializers; numeric foreign keys stay
//! as plain ids. `UserInfo` is special: the server owns its shape, so every
//! field beyond `is_authenticated` passes through verbatim.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The current user's session record as reported by `/api/user/info/`.
///
/// The record is replaced whole on every session-state transition, never
/// merged. Fields the server sends beyond `is_authenticated` are kept in
/// `extra` so the stored record equals the response body exactly.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Credentials submitted to `/api/user/login/`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// An airline company.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Airline {
    pub id: i64,
    pub name: String,
    pub picture: Option<String>,
}

/// A scheduled flight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub route: String,
    pub airline: Option<i64>,
    pub price: i64,
    pub departure_time: String,
    pub arrival_time: String,
}

/// A passenger belonging to the current user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    pub id: i64,
    pub full_name: String,
    pub passport: String,
    #[serde(default)]
    pub phone: String,
    pub picture: Option<String>,
    pub user: i64,
}

/// A fare rate applied as a price multiplier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    pub id: i64,
    pub name: String,
    pub multiplier: f64,
}

/// A booked ticket. Carries denormalized display names alongside the
/// foreign-key ids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub flight: i64,
    pub flight_name: String,
    pub passenger: i64,
    pub passenger_name: String,
    pub rate: i64,
    pub rate_name: String,
    #[serde(default)]
    pub seat: String,
    pub booking_date: String,
}
