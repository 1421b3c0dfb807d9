//! One page component per routed view.

pub mod airlines;
pub mod flights;
pub mod passengers;
pub mod rates;
pub mod tickets;
