//! RFM loyalty tiering: assigns Bronze/Silver/Gold/Platinum from a customer's
//! recency, frequency, and monetary activity.

pub mod engine;

pub use engine::TierClassifier;
pub use tiering_core::{
    CustomerActivity, CustomerTier, ScoreBreakdown, TieringConfig, TieringError, TieringResult,
};
