use rquest::Client;

use crate::prelude::*;

use super::types::{Product, ProductsResponse};

/// Fetches one page of the catalog. With a query the request becomes
/// `{url}?q={query}`.
pub async fn fetch_products(
    client: &Client,
    url: &str,
    query: Option<&str>,
) -> Result<Vec<Product>> {
    let mut request = client.get(url);
    if let Some(query) = query {
        request = request.query(&[("q", query)]);
    }

    let response = request
        .send()
        .await
        .map_err(|err| anyhow!("failed to send request {}", err))?;

    let response_status = response.status();
    let response_text = response
        .text()
        .await
        .map_err(|err| anyhow!("failed to get response text {}", err))?;

    if !response_status.is_success() {
        bail!("bad status {}", response_status);
    }

    let deserialized_response: ProductsResponse = serde_json::from_str(&response_text)
        .map_err(|err| anyhow!("failed to deserialize response {}", err))?;

    Ok(deserialized_response.products)
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};

    use crate::{catalog::utils::get_client, config::CatalogConfig};

    use super::*;

    const PHONES: &str = r#"{
        "products": [
            {"id": 1, "title": "iPhone 9", "price": 549},
            {"id": 2, "title": "iPhone X", "price": 899.5}
        ],
        "total": 2, "skip": 0, "limit": 30
    }"#;

    #[tokio::test]
    async fn test_fetch_with_query() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/products")
            .match_query(Matcher::UrlEncoded("q".into(), "smart phone".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(PHONES)
            .create_async()
            .await;

        let client = get_client(&CatalogConfig::default()).unwrap();
        let url = format!("{}/products", server.url());
        let products = fetch_products(&client, &url, Some("smart phone"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(
            products.iter().map(|p| (p.id, p.price)).collect::<Vec<_>>(),
            vec![(1, 549), (2, 899)]
        );
    }

    #[tokio::test]
    async fn test_bad_status() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/products")
            .with_status(503)
            .with_body(PHONES)
            .create_async()
            .await;

        let client = get_client(&CatalogConfig::default()).unwrap();
        let url = format!("{}/products", server.url());
        let err = fetch_products(&client, &url, None).await.unwrap_err();
        assert!(err.to_string().contains("bad status"), "{}", err);
    }

    #[tokio::test]
    async fn test_non_json_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/products")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let client = get_client(&CatalogConfig::default()).unwrap();
        let url = format!("{}/products", server.url());
        let err = fetch_products(&client, &url, None).await.unwrap_err();
        assert!(
            err.to_string().contains("failed to deserialize response"),
            "{}",
            err
        );
    }
}
