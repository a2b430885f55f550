//! Logical routes of the app.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// The two navigable views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Login form at `/`.
    Entry,
    /// Session-gated dashboard at `/dashboard`.
    Dashboard,
}

impl AppRoute {
    pub fn path(self) -> &'static str {
        match self {
            Self::Entry => "/",
            Self::Dashboard => "/dashboard",
        }
    }

    /// Parse a location path. Trailing slashes are ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Self::Entry),
            "/dashboard" => Some(Self::Dashboard),
            _ => None,
        }
    }

    /// Whether the view requires an authenticated session.
    pub fn is_gated(self) -> bool {
        matches!(self, Self::Dashboard)
    }
}
