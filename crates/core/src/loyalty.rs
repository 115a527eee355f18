//! Loyalty tier domain types — RFM-scored, four-tier classification.
//!
//! - Four-tier structure: Bronze → Silver → Gold → Platinum
//! - Tiers are ordered by seniority, so `Gold > Silver` holds
//! - Scoring traces are kept alongside the tier for downstream explainability

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TieringError;

// ─── Tier System ────────────────────────────────────────────────────────────

/// Loyalty tier levels, ordered by seniority.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum CustomerTier {
    /// Below 50 points, or anything not meeting a higher threshold.
    #[default]
    Bronze,
    /// 50–69 points. Also the ceiling for accounts younger than 30 days.
    Silver,
    /// 70–84 points.
    Gold,
    /// 85+ points.
    Platinum,
}

impl CustomerTier {
    /// Every tier, lowest first.
    pub const ALL: [CustomerTier; 4] = [
        CustomerTier::Bronze,
        CustomerTier::Silver,
        CustomerTier::Gold,
        CustomerTier::Platinum,
    ];

    /// Stable lowercase identifier, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerTier::Bronze => "bronze",
            CustomerTier::Silver => "silver",
            CustomerTier::Gold => "gold",
            CustomerTier::Platinum => "platinum",
        }
    }
}

impl fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomerTier {
    type Err = TieringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CustomerTier::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TieringError::UnknownTier(s.to_string()))
    }
}

// ─── Scoring Trace ──────────────────────────────────────────────────────────

/// Full trace of a single RFM classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Whole days between the last purchase and the reference date.
    pub days_since_purchase: i64,
    /// Recency points (0–40 with the default config).
    pub recency: f64,
    /// Frequency points (0–30 with the default config).
    pub frequency: f64,
    /// Monetary points (0–30 with the default config).
    pub monetary: f64,
    /// Sum of the three sub-scores, truncated to an integer.
    pub total: i64,
    /// Tier the total maps to before account-age constraints.
    pub unconstrained_tier: CustomerTier,
    /// Final tier.
    pub tier: CustomerTier,
    /// Whether the new-account cap changed the tier.
    pub new_account_capped: bool,
}
