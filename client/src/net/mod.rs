//! Networking modules for the remote profile API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` prepares and sends authenticated requests, `transport` is the HTTP
//! seam, `error` defines the failure taxonomy, and `types` the wire schema.

pub mod api;
pub mod error;
#[cfg(test)]
pub(crate) mod testing;
pub mod transport;
pub mod types;
