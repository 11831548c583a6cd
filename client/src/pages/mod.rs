//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped wiring and delegates rules and state to
//! `crate::auth`.

pub mod login;
pub mod success;
