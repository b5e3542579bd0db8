use serde::{Deserialize, Serialize};

use crate::browser::Availability;
use crate::tier::BaselineTier;

/// Icon state drawn next to each browser logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportIcon {
    Available,
    Unavailable,
    Newly,
    Widely,
    NoData,
}

/// Visual treatment for a [`SupportIcon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconStyle {
    pub class: &'static str,
    pub color: &'static str,
    pub glyph: &'static str,
    pub label: &'static str,
}

impl SupportIcon {
    pub const ALL: [Self; 5] = [
        Self::Available,
        Self::Unavailable,
        Self::Newly,
        Self::Widely,
        Self::NoData,
    ];

    /// Only limited features differ per browser; every other tier draws all
    /// browsers with the tier's own icon.
    #[must_use]
    pub const fn classify(tier: BaselineTier, availability: Availability) -> Self {
        match tier {
            BaselineTier::Limited => match availability {
                Availability::Available => Self::Available,
                Availability::No => Self::Unavailable,
            },
            BaselineTier::Newly => Self::Newly,
            BaselineTier::Widely => Self::Widely,
            BaselineTier::NoData => Self::NoData,
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Unavailable => "unavailable",
            Self::Newly => "newly",
            Self::Widely => "widely",
            Self::NoData => "no_data",
        }
    }

    #[must_use]
    pub const fn style(self) -> IconStyle {
        match self {
            Self::Available => IconStyle {
                class: "support-available",
                color: "#1ea446",
                glyph: "✓",
                label: "supported",
            },
            Self::Unavailable => IconStyle {
                class: "support-unavailable",
                color: "#da3025",
                glyph: "✗",
                label: "not supported",
            },
            Self::Newly => IconStyle {
                class: "support-newly",
                color: "#1a73e8",
                glyph: "✓",
                label: "newly available",
            },
            Self::Widely => IconStyle {
                class: "support-widely",
                color: "#1ea446",
                glyph: "✓",
                label: "widely available",
            },
            Self::NoData => IconStyle {
                class: "support-no_data",
                color: "#909090",
                glyph: "?",
                label: "unknown",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limited_follows_browser_availability() {
        assert_eq!(
            SupportIcon::classify(BaselineTier::Limited, Availability::Available),
            SupportIcon::Available
        );
        assert_eq!(
            SupportIcon::classify(BaselineTier::Limited, Availability::No),
            SupportIcon::Unavailable
        );
    }

    #[test]
    fn other_tiers_override_browser_availability() {
        for availability in [Availability::Available, Availability::No] {
            assert_eq!(
                SupportIcon::classify(BaselineTier::Widely, availability),
                SupportIcon::Widely
            );
            assert_eq!(
                SupportIcon::classify(BaselineTier::Newly, availability),
                SupportIcon::Newly
            );
            assert_eq!(
                SupportIcon::classify(BaselineTier::NoData, availability),
                SupportIcon::NoData
            );
        }
    }

    #[test]
    fn every_icon_has_a_distinct_class() {
        let mut classes: Vec<&str> = SupportIcon::ALL.iter().map(|i| i.style().class).collect();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), SupportIcon::ALL.len());
        for icon in SupportIcon::ALL {
            assert!(icon.style().class.ends_with(icon.key()));
        }
    }
}
