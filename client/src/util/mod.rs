//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep presentation rules and route-guard behavior out of
//! page and component bodies so they can be unit tested.

pub mod auth;
pub mod profile_display;
