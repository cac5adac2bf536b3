use serde::{Serialize, Deserialize};

/// The kind of reusable packaging a catalog entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContainerType {
    GlassBottle,
    PlasticBottle,
    Container,
    Jar,
}

/// A returnable container and its fixed credit value. Catalog entries are
/// seeded at startup and immutable for the process lifetime; historical
/// return requests denormalize name and value so later catalog edits never
/// rewrite them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Container {
    pub container_id: String,
    pub name: String,
    pub container_type: ContainerType,
    pub credit_value: u32,
    pub product: String,
    pub image: String,
    pub description: String,
}
