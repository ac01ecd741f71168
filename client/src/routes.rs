//! Client-side route table.
//!
//! Four screens, one of which (`/edit`) owns a form-submission action. The
//! router in `app` and every in-app link go through [`AppRoute`] so paths
//! are spelled once.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    EditProfile,
    Login,
    Signup,
}

impl AppRoute {
    pub const ALL: [Self; 4] = [Self::Home, Self::EditProfile, Self::Login, Self::Signup];

    /// Absolute browser path.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::EditProfile => "/edit",
            Self::Login => "/login",
            Self::Signup => "/signup",
        }
    }

    /// Path segment used by the router (`""` for the root).
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// Route for a browser path. A single trailing slash is tolerated.
    pub fn from_path(path: &str) -> Option<Self> {
        let normalized = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(stripped) => stripped,
        };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }

    /// Whether form submissions on this route run a data-mutation action.
    pub fn has_action(self) -> bool {
        matches!(self, Self::EditProfile)
    }
}
