//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the in-memory session store and its context handle, `storage`
//! its durable token mirror, and `session` the lifecycle that ties the two
//! to the API client.

pub mod auth;
pub mod session;
pub mod storage;
