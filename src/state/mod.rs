//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session record is the only client-wide state. It lives in an
//! `RwSignal<UserInfo>` provided via context from the root component and is
//! mutated exclusively by the actions in [`session`].

pub mod session;
