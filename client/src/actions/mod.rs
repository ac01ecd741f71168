//! Route actions: handlers bound to a path that process a form submission
//! and decide the next navigation state.

pub mod edit;
