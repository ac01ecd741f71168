//! Presentation helpers for user profiles shared by the navbar, home page
//! and profile card.

#[cfg(test)]
#[path = "profile_display_test.rs"]
mod profile_display_test;

use crate::net::types::UserProfile;

pub const NOT_PROVIDED: &str = "Not provided";

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Uppercased first letter of the first name, else of the email, else `U`.
pub fn avatar_initial(user: &UserProfile) -> String {
    non_blank(user.first_name.as_deref())
        .or_else(|| non_blank(Some(user.email.as_str())))
        .and_then(|s| s.chars().next())
        .map_or_else(|| "U".to_owned(), |c| c.to_uppercase().collect())
}

/// Name used in greetings: first name, else the email's local part, else
/// the username.
pub fn greeting_name(user: &UserProfile) -> String {
    if let Some(first) = non_blank(user.first_name.as_deref()) {
        return first.to_owned();
    }
    non_blank(Some(user.email.as_str()))
        .and_then(|email| email.split('@').next())
        .filter(|local| !local.is_empty())
        .unwrap_or(user.username.as_str())
        .to_owned()
}

/// Field value for display, or [`NOT_PROVIDED`].
pub fn or_not_provided(value: Option<&str>) -> String {
    non_blank(value).unwrap_or(NOT_PROVIDED).to_owned()
}

/// Location to show, `None` when the row should be hidden.
pub fn display_location(user: &UserProfile) -> Option<String> {
    non_blank(user.location.as_deref()).map(str::to_owned)
}
