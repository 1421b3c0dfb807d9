//! # airline-client
//!
//! Leptos + WASM frontend for the airline management application.
//! Replaces the Vue.js client with a Rust-native UI layer talking to the
//! same REST backend.
//!
//! This crate contains pages, components, the route table, client-side
//! session state, and the network layer. Browser-only dependencies sit
//! behind the `web` cargo feature so the crate also compiles natively for
//! unit tests.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
