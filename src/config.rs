use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::prelude::*;

const CONFIG_FILE: &str = "catalog.csv";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CatalogConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://dummyjson.com".to_string(),
            timeout_ms: 10000,
        }
    }
}

pub async fn read_config() -> Result<CatalogConfig> {
    read_config_from(CONFIG_FILE).await
}

/// Reads the first valid record of a catalog settings file. A missing file is
/// replaced with the defaults.
pub async fn read_config_from(path: impl AsRef<Path>) -> Result<CatalogConfig> {
    let path = path.as_ref();
    let file = match tokio::fs::read_to_string(path).await {
        Ok(file) => file,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            warn!("Config file not found, writing defaults; path={:?}", path);
            write_default_config(path).await?;
            return Ok(CatalogConfig::default());
        }
        Err(error) => return Err(anyhow!("could not read config file: {}", error)),
    };

    Ok(parse_config(&file))
}

fn parse_config(file: &str) -> CatalogConfig {
    let mut reader = csv::Reader::from_reader(file.as_bytes());
    for record in reader.deserialize::<CatalogConfig>() {
        match record {
            Ok(config) => return config,
            Err(error) => {
                warn!("Skipping invalid config record; err={}", error);
                continue;
            }
        }
    }

    warn!("No valid config record, using defaults");
    CatalogConfig::default()
}

pub async fn write_default_config(path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .serialize(CatalogConfig::default())
        .map_err(|error| anyhow!("could not serialize csv record: {}", error))?;
    let contents = writer
        .into_inner()
        .map_err(|error| anyhow!("could not flush csv writer: {}", error))?;

    tokio::fs::write(path, contents)
        .await
        .map_err(|error| anyhow!("could not write config file {}", error))?;

    Ok(())
}
