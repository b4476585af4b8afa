//! Commission rate preview
//!
//! Best-effort display values for the marketing and checkout pages. Never an
//! authoritative source for billing: any failure yields [`FALLBACK_PREVIEW`].

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::rates::{CommissionRates, OrderKind};
use crate::store::SettingsStore;

/// Served when the settings cannot be read
pub const FALLBACK_PREVIEW: CommissionPreview = CommissionPreview {
    first_rate: 3.0,
    repeat_rate: 1.0,
};

/// Commission rates as percentages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommissionPreview {
    /// First-order commission, percent
    #[schema(example = 3.0)]
    pub first_rate: f64,
    /// Repeat-order commission, percent
    #[schema(example = 1.0)]
    pub repeat_rate: f64,
}

impl CommissionPreview {
    pub fn from_rates(rates: &CommissionRates) -> Option<Self> {
        Some(Self {
            first_rate: rates.percent_for(OrderKind::First).to_f64()?,
            repeat_rate: rates.percent_for(OrderKind::Repeat).to_f64()?,
        })
    }
}

/// Read the settings and convert to percentages, falling back on any failure
pub async fn preview_commission(store: &dyn SettingsStore) -> CommissionPreview {
    match store.commission_rates().await {
        Ok(Some(rates)) => match CommissionPreview::from_rates(&rates) {
            Some(preview) => preview,
            None => {
                tracing::warn!(?rates, "[commission] Rates not representable, using fallback");
                FALLBACK_PREVIEW
            }
        },
        Ok(None) => {
            tracing::warn!("[commission] Settings row missing, using fallback");
            FALLBACK_PREVIEW
        }
        Err(e) => {
            tracing::warn!(error = %e, "[commission] Settings read failed, using fallback");
            FALLBACK_PREVIEW
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, StoreError};
    use async_trait::async_trait;
    use rust_decimal::Decimal;

    /// Settings backend that rejects its stored values
    struct CorruptSettings;

    #[async_trait]
    impl SettingsStore for CorruptSettings {
        async fn commission_rates(&self) -> Result<Option<CommissionRates>, StoreError> {
            Err(StoreError::InvalidData(
                "first_rate must be within [0, 1], got 1.5".into(),
            ))
        }
    }

    fn rates(first: &str, repeat: &str) -> CommissionRates {
        CommissionRates::new(first.parse().unwrap(), repeat.parse().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_preview_scales_by_hundred() {
        let store = MemoryStore::new().with_rates(rates("0.03", "0.01"));
        let preview = preview_commission(&store).await;
        assert_eq!(
            preview,
            CommissionPreview {
                first_rate: 3.0,
                repeat_rate: 1.0
            }
        );
    }

    #[tokio::test]
    async fn test_preview_other_values() {
        let cases = [
            ("0.05", "0.02", 5.0, 2.0),
            ("0.025", "0.0075", 2.5, 0.75),
            ("0", "1", 0.0, 100.0),
            ("0.1234", "0.0001", 12.34, 0.01),
        ];
        for (first, repeat, want_first, want_repeat) in cases {
            let store = MemoryStore::new().with_rates(rates(first, repeat));
            let preview = preview_commission(&store).await;
            assert_eq!(preview.first_rate, want_first, "first_rate for {first}");
            assert_eq!(preview.repeat_rate, want_repeat, "repeat_rate for {repeat}");
        }
    }

    #[tokio::test]
    async fn test_store_failure_falls_back() {
        let store = MemoryStore::new().with_rates(rates("0.08", "0.04"));
        store.set_fail_settings(true);
        assert_eq!(preview_commission(&store).await, FALLBACK_PREVIEW);
    }

    #[tokio::test]
    async fn test_invalid_stored_rates_fall_back() {
        assert_eq!(preview_commission(&CorruptSettings).await, FALLBACK_PREVIEW);
    }

    #[tokio::test]
    async fn test_missing_settings_falls_back() {
        let store = MemoryStore::new();
        assert_eq!(preview_commission(&store).await, FALLBACK_PREVIEW);
    }

    #[test]
    fn test_fallback_values() {
        assert_eq!(FALLBACK_PREVIEW.first_rate, 3.0);
        assert_eq!(FALLBACK_PREVIEW.repeat_rate, 1.0);
        let json = serde_json::to_value(FALLBACK_PREVIEW).unwrap();
        assert_eq!(json, serde_json::json!({ "firstRate": 3.0, "repeatRate": 1.0 }));
    }

    #[test]
    fn test_from_rates_exact_float() {
        // 0.07 * 100 in f64 is 7.000000000000001
        let r = CommissionRates::new(Decimal::new(7, 2), Decimal::new(1, 2)).unwrap();
        let preview = CommissionPreview::from_rates(&r).unwrap();
        assert_eq!(preview.first_rate, 7.0);
    }
}
