use catalog::{service::ProductService, HttpProductProvider, ProductProvider};
use config::read_config;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::prelude::*;

pub mod catalog;
pub mod config;
pub mod prelude;

#[tokio::main]
async fn main() {
    let file_appender = tracing_appender::rolling::hourly("logs", "catalog_stats_logs");
    let (file_writer, _file_guard) = tracing_appender::non_blocking(file_appender);
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_line_number(true)
        .with_file(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(layer)
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let config = read_config().await.expect("Failed to read config");
    info!("Using catalog; base_url={}", config.base_url);

    let provider = HttpProductProvider::new(&config).expect("Failed to build provider");
    match provider.get_products().await {
        Ok(products) => info!("Fetched catalog; count={}", products.len()),
        Err(err) => error!("Failed to fetch catalog; err={:?}", err),
    }

    let mut service = ProductService::new();
    service.set_product_provider(provider);

    match service.compute_average_prices_of_phones().await {
        Ok(average) => info!("Average price of phones; average={:.2}", average),
        Err(err) => error!("Failed to compute average price of phones; err={:?}", err),
    }
}
