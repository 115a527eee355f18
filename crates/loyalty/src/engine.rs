//! Core tiering engine: RFM sub-scores, score-to-tier mapping, and the
//! new-account constraint.

use chrono::{DateTime, Utc};
use tiering_core::config::TieringConfig;
use tiering_core::error::{TieringError, TieringResult};
use tiering_core::loyalty::{CustomerTier, ScoreBreakdown};
use tiering_core::types::CustomerActivity;
use tracing::{debug, info};

/// RFM tier classifier — stateless computation over CustomerActivity data.
///
/// The reference date is captured once at construction; every recency
/// calculation made through this instance uses it.
#[derive(Debug, Clone)]
pub struct TierClassifier {
    reference_date: DateTime<Utc>,
    config: TieringConfig,
}

impl TierClassifier {
    /// Classifier with the standard scoring rules. `None` pins the reference
    /// date to the current time.
    pub fn new(reference_date: Option<DateTime<Utc>>) -> Self {
        Self::build(TieringConfig::default(), reference_date)
    }

    /// Classifier with custom scoring rules.
    pub fn with_config(
        config: &TieringConfig,
        reference_date: Option<DateTime<Utc>>,
    ) -> TieringResult<Self> {
        config.validate()?;
        Ok(Self::build(config.clone(), reference_date))
    }

    fn build(config: TieringConfig, reference_date: Option<DateTime<Utc>>) -> Self {
        let reference_date = reference_date.unwrap_or_else(Utc::now);
        info!(
            reference_date = %reference_date,
            platinum = config.platinum_threshold,
            gold = config.gold_threshold,
            silver = config.silver_threshold,
            new_account_days = config.new_account_days,
            "Tier classifier initialized"
        );
        Self {
            reference_date,
            config,
        }
    }

    /// Assign a tier to the customer.
    pub fn classify(&self, customer: &CustomerActivity) -> TieringResult<CustomerTier> {
        self.score(customer).map(|breakdown| breakdown.tier)
    }

    /// Classify and return every intermediate score.
    pub fn score(&self, customer: &CustomerActivity) -> TieringResult<ScoreBreakdown> {
        if self.reference_date < customer.last_purchase_date {
            metrics::counter!("tiering.invalid_input").increment(1);
            return Err(TieringError::InvalidInput {
                reference_date: self.reference_date,
                last_purchase_date: customer.last_purchase_date,
            });
        }

        let days_since_purchase = customer.days_since_purchase(self.reference_date);
        let recency = self.recency_score(days_since_purchase);
        let frequency = self.frequency_score(customer.total_orders_12m);
        let monetary = self.monetary_score(customer.total_spend_12m);
        // Thresholds are defined against the truncated total.
        let total = (recency + frequency + monetary) as i64;

        let unconstrained_tier = self.tier_for_score(total);
        let tier = self.apply_constraints(customer, unconstrained_tier);
        let new_account_capped = tier != unconstrained_tier;

        if new_account_capped {
            metrics::counter!("tiering.new_account_caps").increment(1);
            debug!(
                account_age_days = customer.account_age_days,
                unconstrained = %unconstrained_tier,
                tier = %tier,
                "New account capped"
            );
        }
        metrics::counter!("tiering.classifications", "tier" => tier.as_str()).increment(1);

        debug!(
            days_since_purchase = days_since_purchase,
            recency = recency,
            frequency = frequency,
            monetary = monetary,
            total = total,
            tier = %tier,
            "Customer classified"
        );

        Ok(ScoreBreakdown {
            days_since_purchase,
            recency,
            frequency,
            monetary,
            total,
            unconstrained_tier,
            tier,
            new_account_capped,
        })
    }

    /// Recency points: full marks on the reference date, decaying linearly
    /// to zero at the end of the recency window.
    pub fn recency_score(&self, days_since_purchase: i64) -> f64 {
        let max = self.config.recency_max_points;
        let decay = days_since_purchase as f64 * max / self.config.recency_window_days as f64;
        (max - decay).max(0.0)
    }

    /// Frequency points. Saturates at 10 orders with the default rates.
    pub fn frequency_score(&self, total_orders_12m: i64) -> f64 {
        let counted = total_orders_12m.min(self.config.max_counted_orders);
        (counted as f64 * self.config.points_per_order).min(self.config.frequency_max_points)
    }

    /// Monetary points. Refunds can push spend negative; the score floors at 0.
    pub fn monetary_score(&self, total_spend_12m: f64) -> f64 {
        (total_spend_12m * self.config.points_per_dollar)
            .min(self.config.monetary_max_points)
            .max(0.0)
    }

    pub fn tier_for_score(&self, total: i64) -> CustomerTier {
        if total >= self.config.platinum_threshold {
            CustomerTier::Platinum
        } else if total >= self.config.gold_threshold {
            CustomerTier::Gold
        } else if total >= self.config.silver_threshold {
            CustomerTier::Silver
        } else {
            CustomerTier::Bronze
        }
    }

    /// Accounts younger than `new_account_days` are held at Silver. Bronze is
    /// never raised.
    pub fn apply_constraints(
        &self,
        customer: &CustomerActivity,
        tier: CustomerTier,
    ) -> CustomerTier {
        if customer.account_age_days < self.config.new_account_days && tier != CustomerTier::Bronze
        {
            CustomerTier::Silver
        } else {
            tier
        }
    }

    pub fn reference_date(&self) -> DateTime<Utc> {
        self.reference_date
    }

    pub fn config(&self) -> &TieringConfig {
        &self.config
    }
}

impl Default for TierClassifier {
    fn default() -> Self {
        Self::new(None)
    }
}
