//! Page routes.
//!
//! Canonical paths are `/`, `/card/:id` and `/reading`. The older Spanish
//! paths `/carta/:id` and `/lectura` are still accepted and map onto the
//! same routes.

use std::fmt;

use crate::cards::CardId;

/// A page the user can navigate to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Route {
    /// Card grid.
    #[default]
    Home,
    /// One card in full. `id` is `None` when the path had no id segment.
    CardDetail { id: Option<CardId> },
    /// Three-card reading.
    Reading,
}

impl Route {
    /// Detail route for a card.
    #[must_use]
    pub fn card(id: impl Into<CardId>) -> Self {
        Route::CardDetail { id: Some(id.into()) }
    }

    /// Parse a path. Query strings and fragments are ignored.
    ///
    /// ```
    /// use tarot_stem::router::Route;
    ///
    /// assert_eq!(Route::parse("/lectura"), Some(Route::Reading));
    /// assert_eq!(Route::parse("/card/3"), Some(Route::card("3")));
    /// assert_eq!(Route::parse("/nowhere"), None);
    /// ```
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Home),
            ["card" | "carta"] => Some(Route::CardDetail { id: None }),
            ["card" | "carta", id] => Some(Route::card(*id)),
            ["reading" | "lectura"] => Some(Route::Reading),
            _ => None,
        }
    }

    /// Canonical path.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::CardDetail { id: Some(id) } => format!("/card/{id}"),
            Route::CardDetail { id: None } => "/card/".to_string(),
            Route::Reading => "/reading".to_string(),
        }
    }

    /// Whether a navigation link to `link` should be marked active.
    ///
    /// Home is active only on itself; other links are active on any route
    /// below them.
    #[must_use]
    pub fn is_active(&self, link: &Route) -> bool {
        match link {
            Route::Home => self == &Route::Home,
            Route::CardDetail { .. } => matches!(self, Route::CardDetail { .. }),
            Route::Reading => self == &Route::Reading,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
