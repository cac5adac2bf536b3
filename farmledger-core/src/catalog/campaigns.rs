// File: farmledger-core/src/catalog/campaigns.rs

use chrono::{DateTime, TimeZone, Utc};

use farmledger_common::models::campaign::{FlashSale, SeasonalOffer};
use farmledger_common::models::reward::DiscountKind;

/// Author-maintained campaign entries. `is_active` is an independent
/// kill-switch: a campaign is live only when the flag is set AND now is
/// inside its window. Callers must not read `is_active` alone as liveness.
pub struct CampaignCatalog {
    flash_sales: Vec<FlashSale>,
    seasonal_offers: Vec<SeasonalOffer>,
}

impl CampaignCatalog {
    pub fn new(flash_sales: Vec<FlashSale>, seasonal_offers: Vec<SeasonalOffer>) -> Self {
        Self {
            flash_sales,
            seasonal_offers,
        }
    }

    pub fn aadhya_default() -> Self {
        let date = |y, m, d| -> DateTime<Utc> {
            Utc.with_ymd_and_hms(y, m, d, 0, 0, 0)
                .single()
                .unwrap_or_else(Utc::now)
        };
        Self::new(
            vec![
                FlashSale {
                    sale_id: "flash-1".into(),
                    title: "Weekend Ghee Rush".into(),
                    description: "30% off A2 ghee, this weekend only".into(),
                    discount_kind: DiscountKind::Percentage,
                    discount_value: 30,
                    products: vec!["ghee-500ml".into(), "ghee-1l".into()],
                    starts_at: date(2026, 8, 22),
                    ends_at: date(2026, 8, 24),
                    is_active: true,
                },
                FlashSale {
                    sale_id: "flash-2".into(),
                    title: "Honey Harvest Hour".into(),
                    description: "Rs 100 off raw forest honey".into(),
                    discount_kind: DiscountKind::Fixed,
                    discount_value: 100,
                    products: vec!["honey-250g".into(), "honey-500g".into()],
                    starts_at: date(2026, 9, 1),
                    ends_at: date(2026, 9, 2),
                    is_active: false,
                },
            ],
            vec![
                SeasonalOffer {
                    offer_id: "seasonal-1".into(),
                    season: "monsoon".into(),
                    title: "Monsoon Harvest Box".into(),
                    description: "15% off the seasonal vegetable box all monsoon".into(),
                    discount_kind: DiscountKind::Percentage,
                    discount_value: 15,
                    starts_at: date(2026, 6, 1),
                    ends_at: date(2026, 9, 30),
                    is_active: true,
                },
                SeasonalOffer {
                    offer_id: "seasonal-2".into(),
                    season: "winter".into(),
                    title: "Winter Wellness".into(),
                    description: "10% off ghee and honey through winter".into(),
                    discount_kind: DiscountKind::Percentage,
                    discount_value: 10,
                    starts_at: date(2026, 11, 15),
                    ends_at: date(2027, 2, 15),
                    is_active: true,
                },
            ],
        )
    }

    pub fn flash_sales(&self) -> &[FlashSale] {
        &self.flash_sales
    }

    pub fn seasonal_offers(&self) -> &[SeasonalOffer] {
        &self.seasonal_offers
    }

    /// Flash sales whose kill-switch is on and whose window contains `now`.
    pub fn live_flash_sales(&self, now: DateTime<Utc>) -> Vec<&FlashSale> {
        self.flash_sales
            .iter()
            .filter(|s| s.is_live_at(now))
            .collect()
    }

    pub fn live_seasonal_offers(&self, now: DateTime<Utc>) -> Vec<&SeasonalOffer> {
        self.seasonal_offers
            .iter()
            .filter(|o| o.is_live_at(now))
            .collect()
    }
}
