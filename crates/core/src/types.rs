use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Trailing-12-month activity snapshot for one customer.
///
/// Numeric fields are taken as given: negative spend (refunds), negative or
/// very large order counts and a zero account age are all valid inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerActivity {
    pub last_purchase_date: DateTime<Utc>,
    pub total_orders_12m: i64,
    pub total_spend_12m: f64,
    pub account_age_days: i64,
}

impl CustomerActivity {
    /// Whole days elapsed between the last purchase and `reference_date`.
    /// Negative when the purchase lies after the reference date.
    pub fn days_since_purchase(&self, reference_date: DateTime<Utc>) -> i64 {
        (reference_date - self.last_purchase_date).num_days()
    }
}
