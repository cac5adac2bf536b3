// File: farmledger-core/src/catalog/mod.rs
//
// Static reference data: the returnable-container catalog and the redemption
// catalog. Both are seeded at startup and immutable for the process
// lifetime; lookups either resolve or signal absence, nothing else.

pub mod campaigns;

use farmledger_common::models::container::{Container, ContainerType};
use farmledger_common::models::credit::{CreditRedemption, RedemptionKind};

pub use campaigns::CampaignCatalog;

pub struct ContainerCatalog {
    containers: Vec<Container>,
}

impl ContainerCatalog {
    pub fn new(containers: Vec<Container>) -> Self {
        Self { containers }
    }

    /// The storefront's default returnable containers.
    pub fn aadhya_default() -> Self {
        Self::new(vec![
            Container {
                container_id: "container-1".into(),
                name: "1L Glass Milk Bottle".into(),
                container_type: ContainerType::GlassBottle,
                credit_value: 10,
                product: "A2 Desi Cow Milk".into(),
                image: "/images/containers/glass-bottle-1l.jpg".into(),
                description: "Reusable 1 litre glass bottle, rinse before returning".into(),
            },
            Container {
                container_id: "container-2".into(),
                name: "500ml Glass Milk Bottle".into(),
                container_type: ContainerType::GlassBottle,
                credit_value: 7,
                product: "A2 Desi Cow Milk".into(),
                image: "/images/containers/glass-bottle-500ml.jpg".into(),
                description: "Reusable 500ml glass bottle, rinse before returning".into(),
            },
            Container {
                container_id: "container-3".into(),
                name: "500ml Ghee Jar".into(),
                container_type: ContainerType::Jar,
                credit_value: 8,
                product: "A2 Cow Ghee".into(),
                image: "/images/containers/ghee-jar-500ml.jpg".into(),
                description: "Glass jar with metal lid, return with the lid on".into(),
            },
            Container {
                container_id: "container-4".into(),
                name: "400g Curd Container".into(),
                container_type: ContainerType::Container,
                credit_value: 5,
                product: "Farm Fresh Curd".into(),
                image: "/images/containers/curd-container-400g.jpg".into(),
                description: "Food-grade container for daily curd delivery".into(),
            },
            Container {
                container_id: "container-5".into(),
                name: "5L Cold-Pressed Oil Can".into(),
                container_type: ContainerType::PlasticBottle,
                credit_value: 12,
                product: "Cold-Pressed Groundnut Oil".into(),
                image: "/images/containers/oil-can-5l.jpg".into(),
                description: "Bulk oil can, drain fully before returning".into(),
            },
            Container {
                container_id: "container-6".into(),
                name: "250g Honey Jar".into(),
                container_type: ContainerType::Jar,
                credit_value: 6,
                product: "Raw Forest Honey".into(),
                image: "/images/containers/honey-jar-250g.jpg".into(),
                description: "Small glass jar, remove the label if possible".into(),
            },
        ])
    }

    pub fn get(&self, container_id: &str) -> Option<&Container> {
        self.containers
            .iter()
            .find(|c| c.container_id == container_id)
    }

    pub fn list(&self) -> &[Container] {
        &self.containers
    }
}

pub struct RedemptionCatalog {
    redemptions: Vec<CreditRedemption>,
}

impl RedemptionCatalog {
    pub fn new(redemptions: Vec<CreditRedemption>) -> Self {
        Self { redemptions }
    }

    pub fn aadhya_default() -> Self {
        Self::new(vec![
            CreditRedemption {
                redemption_id: "redemption-1".into(),
                code: "FARM50".into(),
                kind: RedemptionKind::Discount,
                credit_cost: 50,
                value: 50,
                title: "Rs 50 off your next order".into(),
                description: "Flat discount on any order above Rs 500".into(),
                image: "/images/redemptions/discount-50.jpg".into(),
                available: true,
            },
            CreditRedemption {
                redemption_id: "redemption-2".into(),
                code: "FREEMILK".into(),
                kind: RedemptionKind::FreeProduct,
                credit_cost: 80,
                value: 60,
                title: "Free 500ml A2 Milk".into(),
                description: "One free bottle with your next delivery".into(),
                image: "/images/redemptions/free-milk.jpg".into(),
                available: true,
            },
            CreditRedemption {
                redemption_id: "redemption-3".into(),
                code: "DOUBLEUP".into(),
                kind: RedemptionKind::BonusPoints,
                credit_cost: 100,
                value: 120,
                title: "Convert to 120 loyalty points".into(),
                description: "Swap credits for loyalty points at a premium".into(),
                image: "/images/redemptions/bonus-points.jpg".into(),
                available: false,
            },
        ])
    }

    pub fn get(&self, redemption_id: &str) -> Option<&CreditRedemption> {
        self.redemptions
            .iter()
            .find(|r| r.redemption_id == redemption_id)
    }

    pub fn list(&self) -> &[CreditRedemption] {
        &self.redemptions
    }
}
