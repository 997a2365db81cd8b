//! Page chrome: navigation bar, footer and error banner.

use crate::router::Route;

const BRAND: &str = "Tarot STEM";
const FOOTER: &str = "Tarot STEM: connecting ancestral wisdom with modern science";

/// Top navigation with the active link marked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Navigation {
    active: Route,
}

impl Navigation {
    /// Links shown in the bar, in order.
    pub const LINKS: [(&'static str, Route); 2] = [("Home", Route::Home), ("Reading", Route::Reading)];

    #[must_use]
    pub fn new(active: Route) -> Self {
        Self { active }
    }

    /// Label of the active link, if any link matches the current route.
    #[must_use]
    pub fn active_label(&self) -> Option<&'static str> {
        Self::LINKS
            .iter()
            .find(|(_, link)| self.active.is_active(link))
            .map(|(label, _)| *label)
    }

    #[must_use]
    pub fn render(&self) -> String {
        let links: Vec<String> = Self::LINKS
            .iter()
            .map(|(label, link)| {
                if self.active.is_active(link) {
                    format!("[{label}]")
                } else {
                    format!(" {label} ")
                }
            })
            .collect();
        format!("✦ {BRAND}   {}", links.join("  "))
    }
}

/// Navigation above, footer below, page content between.
pub struct Layout;

impl Layout {
    #[must_use]
    pub fn render(route: &Route, content: &str) -> String {
        let nav = Navigation::new(route.clone()).render();
        let rule = "─".repeat(nav.chars().count().max(FOOTER.chars().count()));
        format!("{nav}\n{rule}\n{content}\n{rule}\n{FOOTER}")
    }
}

/// Error message with a hint on how to retry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorBanner {
    message: String,
    retry_hint: Option<String>,
}

impl ErrorBanner {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            retry_hint: None,
        }
    }

    #[must_use]
    pub fn retry_hint(mut self, hint: impl Into<String>) -> Self {
        self.retry_hint = Some(hint.into());
        self
    }

    #[must_use]
    pub fn render(&self) -> String {
        match &self.retry_hint {
            Some(hint) => format!("! {}\n  {hint}", self.message),
            None => format!("! {}", self.message),
        }
    }
}
