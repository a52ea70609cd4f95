use std::time::Duration;

use rquest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};

use crate::{config::CatalogConfig, prelude::*};

pub fn get_client(config: &CatalogConfig) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_millis(config.timeout_ms))
        .build()
        .map_err(|err| anyhow!("failed to build http client {}", err))
}

pub fn products_url(base_url: &str) -> String {
    format!("{}/products", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_url() {
        assert_eq!(
            products_url("https://dummyjson.com"),
            "https://dummyjson.com/products"
        );
        assert_eq!(
            products_url("http://127.0.0.1:1234/"),
            "http://127.0.0.1:1234/products"
        );
    }

    #[test]
    fn test_get_client() {
        assert!(get_client(&CatalogConfig::default()).is_ok());
    }
}
