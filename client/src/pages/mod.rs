//! Route-level page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages compose components and own per-page form state. Session state comes
//! from the auth context provided by `app::App`.

pub mod edit_profile;
pub mod home;
pub mod login;
pub mod signup;
