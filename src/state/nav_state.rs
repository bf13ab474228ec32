//! Navigation state for the sidebar.

/// The dashboard's top-level views, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Overview,
    Logs,
    Anomalies,
    Chat,
    Settings,
}

impl View {
    /// Sidebar order. This is the route table consumed by the sidebar; the
    /// set of routes is owned by the product, not by this crate.
    pub const ALL: [View; 5] = [
        View::Overview,
        View::Logs,
        View::Anomalies,
        View::Chat,
        View::Settings,
    ];

    /// Translation key of the view's label.
    pub fn label_key(self) -> &'static str {
        match self {
            View::Overview => "nav.overview",
            View::Logs => "nav.logs",
            View::Anomalies => "nav.anomalies",
            View::Chat => "nav.chat",
            View::Settings => "nav.settings",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            View::Overview => "📊",
            View::Logs => "📜",
            View::Anomalies => "⚠",
            View::Chat => "💬",
            View::Settings => "⚙",
        }
    }
}

/// State related to navigation and the sidebar.
#[derive(Debug, Clone)]
pub struct NavState {
    active: View,
    sidebar_expanded: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavState {
    pub fn new() -> Self {
        Self {
            active: View::Overview,
            sidebar_expanded: true,
        }
    }

    pub fn with_sidebar_expanded(sidebar_expanded: bool) -> Self {
        Self {
            active: View::Overview,
            sidebar_expanded,
        }
    }

    pub fn active(&self) -> View {
        self.active
    }

    pub fn select(&mut self, view: View) {
        self.active = view;
    }

    pub fn sidebar_expanded(&self) -> bool {
        self.sidebar_expanded
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_expanded = !self.sidebar_expanded;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_overview() {
        let nav = NavState::new();
        assert_eq!(nav.active(), View::Overview);
        assert!(nav.sidebar_expanded());
    }

    #[test]
    fn test_select_and_toggle() {
        let mut nav = NavState::new();
        nav.select(View::Anomalies);
        assert_eq!(nav.active(), View::Anomalies);
        nav.toggle_sidebar();
        assert!(!nav.sidebar_expanded());
    }

    #[test]
    fn test_every_view_has_icon_and_label_key() {
        for view in View::ALL {
            assert!(!view.icon().is_empty());
            assert!(view.label_key().starts_with("nav."));
        }
    }
}
