//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and profile views while reading the
//! session from the auth context.

pub mod navbar;
pub mod profile_card;
