use anyhow::Result;
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use reclayer_catalog::{CatalogConfig, Container};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = CatalogConfig::from_env()?;
    let container = Container::new(&config)?;

    let product = container
        .usecase()
        .create_product(json!({ "id": 10, "name": "Smartphone", "price": 699.99 }))?;
    info!(id = product.id(), "created product");

    println!("{product}");

    Ok(())
}
