/// Public page describing a feature on webstatus.dev.
pub const LEARN_MORE_BASE: &str = "https://webstatus.dev/features/";

/// Where outbound documentation and upvote links open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkTarget {
    /// Replace the current top-level page.
    #[default]
    SameContext,
    /// Open a new tab that cannot reach back to the opener.
    NewTab,
}

impl LinkTarget {
    #[must_use]
    pub const fn from_new_tab(open_in_new_tab: bool) -> Self {
        if open_in_new_tab {
            Self::NewTab
        } else {
            Self::SameContext
        }
    }

    #[must_use]
    pub const fn target(self) -> &'static str {
        match self {
            Self::SameContext => "_top",
            Self::NewTab => "_blank",
        }
    }

    #[must_use]
    pub const fn rel(self) -> Option<&'static str> {
        match self {
            Self::SameContext => None,
            Self::NewTab => Some("noopener noreferrer"),
        }
    }
}

/// Learn-more URL for a feature id, appended as-is.
#[must_use]
pub fn learn_more_url(feature_id: &str) -> String {
    format!("{LEARN_MORE_BASE}{feature_id}")
}
