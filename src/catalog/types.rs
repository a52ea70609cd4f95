use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Product {
    pub id: u32,
    #[serde(deserialize_with = "truncated_price")]
    pub price: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Catalog fields this crate does not read (category, rating, stock...).
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Product {
    pub fn new(id: u32, price: u32) -> Self {
        Self {
            id,
            price,
            title: None,
            description: None,
            details: Map::new(),
        }
    }
}

/// Top level shape of every `/products` response.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub skip: u32,
    #[serde(default)]
    pub limit: u32,
}

// The catalog sends decimal prices; they are truncated towards zero.
fn truncated_price<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Number::deserialize(deserializer)?;
    if let Some(price) = value.as_u64() {
        return u32::try_from(price).map_err(|_| de::Error::custom("price out of range"));
    }

    match value.as_f64() {
        Some(price) if price >= 0.0 && price <= u32::MAX as f64 => Ok(price.trunc() as u32),
        _ => Err(de::Error::custom(format!("invalid price {}", value))),
    }
}
