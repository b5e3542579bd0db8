//! Baseline tiers and their fixed headline/description table.

use serde::{Deserialize, Serialize};

/// Cross-browser maturity of a feature as reported by the status API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaselineTier {
    Limited,
    Newly,
    Widely,
    NoData,
}

/// Static text attached to a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierDefinition {
    pub title: &'static str,
    pub default_description: &'static str,
}

impl BaselineTier {
    pub const ALL: [Self; 4] = [Self::Limited, Self::Newly, Self::Widely, Self::NoData];

    /// Title and fallback description for this tier.
    #[must_use]
    pub const fn definition(self) -> TierDefinition {
        match self {
            Self::Limited => TierDefinition {
                title: "Limited availability",
                default_description: "This feature is not Baseline because it does not work in some of the most widely-used browsers.",
            },
            Self::Newly => TierDefinition {
                title: "Baseline",
                default_description: "This feature works across the latest devices and browser versions. This feature might not work in older devices or browsers.",
            },
            Self::Widely => TierDefinition {
                title: "Widely available",
                default_description: "This feature is well established and works across many devices and browser versions.",
            },
            Self::NoData => TierDefinition {
                title: "Unknown availability",
                default_description: "We currently don’t have browser support information about this feature.",
            },
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        self.definition().title
    }

    /// Wire name used by the status API.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Limited => "limited",
            Self::Newly => "newly",
            Self::Widely => "widely",
            Self::NoData => "no_data",
        }
    }

    /// Newly and widely available features count as Baseline.
    #[must_use]
    pub const fn is_baseline(self) -> bool {
        matches!(self, Self::Newly | Self::Widely)
    }
}

impl std::fmt::Display for BaselineTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
