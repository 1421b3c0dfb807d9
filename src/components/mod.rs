//! Reusable UI components shared across pages.

pub mod login_form;
pub mod navbar;
