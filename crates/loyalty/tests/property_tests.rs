use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use tiering_loyalty::{CustomerActivity, CustomerTier, TierClassifier, TieringError};

fn reference_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 31, 23, 59, 59).unwrap()
}

// Strategy for generating arbitrary activity snapshots at or before the reference date
prop_compose! {
    fn arbitrary_activity()
        (days_ago in 0i64..2000,
         orders in -5i64..500,
         spend in -2000.0f64..20_000.0,
         age in -10i64..5000)
        -> CustomerActivity
    {
        CustomerActivity {
            last_purchase_date: reference_date() - Duration::days(days_ago),
            total_orders_12m: orders,
            total_spend_12m: spend,
            account_age_days: age,
        }
    }
}

proptest! {
    #[test]
    fn prop_classification_is_deterministic(customer in arbitrary_activity()) {
        let classifier = TierClassifier::new(Some(reference_date()));
        let first = classifier.classify(&customer).unwrap();
        let second = classifier.classify(&customer).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_more_recent_purchase_never_lowers_score(
        customer in arbitrary_activity(),
        closer_by in 0i64..400
    ) {
        let classifier = TierClassifier::new(Some(reference_date()));
        let days_ago = customer.days_since_purchase(reference_date());
        let recent = CustomerActivity {
            last_purchase_date: reference_date() - Duration::days((days_ago - closer_by).max(0)),
            ..customer.clone()
        };

        let older = classifier.score(&customer).unwrap();
        let newer = classifier.score(&recent).unwrap();
        prop_assert!(newer.total >= older.total,
            "recency regression: {} days -> {}, {} days -> {}",
            older.days_since_purchase, older.total, newer.days_since_purchase, newer.total);
    }

    #[test]
    fn prop_sub_scores_stay_in_bounds(customer in arbitrary_activity()) {
        let classifier = TierClassifier::new(Some(reference_date()));
        let breakdown = classifier.score(&customer).unwrap();

        prop_assert!((0.0..=40.0).contains(&breakdown.recency));
        prop_assert!(breakdown.frequency <= 30.0);
        prop_assert!((0.0..=30.0).contains(&breakdown.monetary));
    }

    #[test]
    fn prop_frequency_saturates_from_ten_orders(orders in 10i64..100_000) {
        let classifier = TierClassifier::new(Some(reference_date()));
        prop_assert_eq!(classifier.frequency_score(orders), 30.0);
    }

    #[test]
    fn prop_monetary_saturates_from_thousand(spend in 1000.0f64..1.0e9) {
        let classifier = TierClassifier::new(Some(reference_date()));
        prop_assert_eq!(classifier.monetary_score(spend), 30.0);
    }

    #[test]
    fn prop_negative_spend_scores_zero(spend in -1.0e9f64..=0.0) {
        let classifier = TierClassifier::new(Some(reference_date()));
        prop_assert_eq!(classifier.monetary_score(spend), 0.0);
    }

    #[test]
    fn prop_new_accounts_never_exceed_silver(
        customer in arbitrary_activity(),
        age in -10i64..30
    ) {
        let classifier = TierClassifier::new(Some(reference_date()));
        let young = CustomerActivity { account_age_days: age, ..customer };
        let breakdown = classifier.score(&young).unwrap();

        prop_assert!(breakdown.tier <= CustomerTier::Silver);
        if breakdown.unconstrained_tier == CustomerTier::Bronze {
            prop_assert_eq!(breakdown.tier, CustomerTier::Bronze);
        } else {
            prop_assert_eq!(breakdown.tier, CustomerTier::Silver);
        }
    }

    #[test]
    fn prop_future_purchase_is_rejected(
        customer in arbitrary_activity(),
        ahead_secs in 1i64..10_000_000
    ) {
        let classifier = TierClassifier::new(Some(reference_date()));
        let future = CustomerActivity {
            last_purchase_date: reference_date() + Duration::seconds(ahead_secs),
            ..customer
        };
        let is_invalid = matches!(
            classifier.classify(&future),
            Err(TieringError::InvalidInput { .. })
        );
        prop_assert!(is_invalid);
    }
}
