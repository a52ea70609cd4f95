use crate::prelude::*;

use super::{types::Product, ProductProvider};

const PHONE_QUERY: &str = "phone";

/// Computes statistics over whatever catalog the current provider exposes.
pub struct ProductService<P> {
    product_provider: Option<P>,
}

impl<P> Default for ProductService<P> {
    fn default() -> Self {
        Self {
            product_provider: None,
        }
    }
}

impl<P: ProductProvider> ProductService<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_product_provider(&mut self, product_provider: P) {
        self.product_provider = Some(product_provider);
    }

    /// Mean price of everything the provider returns for `"phone"`, or `0.0`
    /// when nothing matches.
    pub async fn compute_average_prices_of_phones(&self) -> Result<f64> {
        let provider = self
            .product_provider
            .as_ref()
            .ok_or(anyhow!("product provider not set"))?;

        let products = provider.search_for_product(PHONE_QUERY).await?;
        let average = average_price(&products);
        info!(
            "Computed average price of phones; count={}; average={}",
            products.len(),
            average
        );

        Ok(average)
    }
}

pub fn average_price(products: &[Product]) -> f64 {
    if products.is_empty() {
        return 0.0;
    }

    let total: u64 = products.iter().map(|product| product.price as u64).sum();
    total as f64 / products.len() as f64
}
