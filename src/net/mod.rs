//! Network layer: REST API calls and the wire records they exchange.

pub mod api;
pub mod types;
