use std::fmt::Debug;

use rquest::Client;

use crate::{config::CatalogConfig, prelude::*};

use self::{api::*, types::Product, utils::*};

pub mod api;
pub mod service;
pub mod types;
pub mod utils;

/// Source of catalog data consumed by [`service::ProductService`].
#[allow(async_fn_in_trait)]
pub trait ProductProvider {
    /// Full, unfiltered catalog.
    async fn get_products(&self) -> Result<Vec<Product>, ProviderError>;

    /// Catalog entries matching a free-text query.
    async fn search_for_product(&self, query: &str) -> Result<Vec<Product>, ProviderError>;
}

pub struct HttpProductProvider {
    pub base_url: String,
    pub client: Client,
}

impl Debug for HttpProductProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "base_url={}", self.base_url)
    }
}

impl HttpProductProvider {
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        Ok(Self {
            base_url: config.base_url.clone(),
            client: get_client(config)?,
        })
    }
}

impl ProductProvider for HttpProductProvider {
    #[tracing::instrument]
    async fn get_products(&self) -> Result<Vec<Product>, ProviderError> {
        let products = fetch_products(&self.client, &products_url(&self.base_url), None).await?;
        debug!("Received products; count={}", products.len());

        Ok(products)
    }

    #[tracing::instrument]
    async fn search_for_product(&self, query: &str) -> Result<Vec<Product>, ProviderError> {
        let products =
            fetch_products(&self.client, &products_url(&self.base_url), Some(query)).await?;
        debug!("Received products; count={}", products.len());

        Ok(products)
    }
}
