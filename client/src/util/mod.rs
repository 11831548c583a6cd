//! Browser glue for the auth core.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `web-sys` concerns from the page and the auth
//! core. Each degrades to a harmless no-op (or an `Unavailable` error) when
//! compiled without the `hydrate` feature.

pub mod navigation;
pub mod storage;
pub mod timer;
