use serde::Deserialize;

use crate::error::{TieringError, TieringResult};

/// RFM scoring configuration. Loaded from environment variables with the
/// prefix `TIERING__`; every field falls back to the standard program rules.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TieringConfig {
    /// Points for a purchase made on the reference date.
    #[serde(default = "default_recency_max_points")]
    pub recency_max_points: f64,
    /// Days after which recency contributes nothing.
    #[serde(default = "default_recency_window_days")]
    pub recency_window_days: i64,
    #[serde(default = "default_points_per_order")]
    pub points_per_order: f64,
    /// Orders beyond this count are ignored. Never reached with the default
    /// rates, since frequency already saturates at 10 orders.
    #[serde(default = "default_max_counted_orders")]
    pub max_counted_orders: i64,
    #[serde(default = "default_frequency_max_points")]
    pub frequency_max_points: f64,
    #[serde(default = "default_points_per_dollar")]
    pub points_per_dollar: f64,
    #[serde(default = "default_monetary_max_points")]
    pub monetary_max_points: f64,
    #[serde(default = "default_platinum_threshold")]
    pub platinum_threshold: i64,
    #[serde(default = "default_gold_threshold")]
    pub gold_threshold: i64,
    #[serde(default = "default_silver_threshold")]
    pub silver_threshold: i64,
    /// Accounts younger than this are capped at Silver.
    #[serde(default = "default_new_account_days")]
    pub new_account_days: i64,
}

fn default_recency_max_points() -> f64 { 40.0 }
fn default_recency_window_days() -> i64 { 365 }
fn default_points_per_order() -> f64 { 3.0 }
fn default_max_counted_orders() -> i64 { 100 }
fn default_frequency_max_points() -> f64 { 30.0 }
fn default_points_per_dollar() -> f64 { 0.03 }
fn default_monetary_max_points() -> f64 { 30.0 }
fn default_platinum_threshold() -> i64 { 85 }
fn default_gold_threshold() -> i64 { 70 }
fn default_silver_threshold() -> i64 { 50 }
fn default_new_account_days() -> i64 { 30 }

impl Default for TieringConfig {
    fn default() -> Self {
        Self {
            recency_max_points: default_recency_max_points(),
            recency_window_days: default_recency_window_days(),
            points_per_order: default_points_per_order(),
            max_counted_orders: default_max_counted_orders(),
            frequency_max_points: default_frequency_max_points(),
            points_per_dollar: default_points_per_dollar(),
            monetary_max_points: default_monetary_max_points(),
            platinum_threshold: default_platinum_threshold(),
            gold_threshold: default_gold_threshold(),
            silver_threshold: default_silver_threshold(),
            new_account_days: default_new_account_days(),
        }
    }
}

impl TieringConfig {
    /// Load configuration from environment variables, then validate it.
    pub fn load() -> TieringResult<Self> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("TIERING")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot produce an ordered tier mapping.
    pub fn validate(&self) -> TieringResult<()> {
        if !(self.silver_threshold < self.gold_threshold
            && self.gold_threshold < self.platinum_threshold)
        {
            return Err(TieringError::Config(format!(
                "tier thresholds must ascend: silver={} gold={} platinum={}",
                self.silver_threshold, self.gold_threshold, self.platinum_threshold
            )));
        }
        if self.recency_window_days <= 0 {
            return Err(TieringError::Config(format!(
                "recency_window_days must be positive, got {}",
                self.recency_window_days
            )));
        }

        let rates = [
            ("recency_max_points", self.recency_max_points),
            ("points_per_order", self.points_per_order),
            ("frequency_max_points", self.frequency_max_points),
            ("points_per_dollar", self.points_per_dollar),
            ("monetary_max_points", self.monetary_max_points),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(TieringError::Config(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}
