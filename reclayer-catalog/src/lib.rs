//! A small product catalog built on reclayer.
//!
//! The catalog is layered the usual way: a validated [`Product`] entity, a
//! [`ProductCrudUsecase`] that talks to any `RecordStore<Product>`, and a [`Container`] that
//! wires the use-case to an in-memory store.
//!
//! # Quick Start
//!
//! ```ignore
//! use reclayer_catalog::{CatalogConfig, Container};
//! use serde_json::json;
//!
//! let container = Container::new(&CatalogConfig::default())?;
//! let usecase = container.usecase();
//!
//! usecase.create_product(json!({ "id": 1, "name": "apple", "price": 2.99 }))?;
//! let cheap = usecase.get_products(json!({ "price": 2.99 }))?;
//! ```

pub mod config;
pub mod container;
pub mod product;
pub mod usecase;

pub use config::CatalogConfig;
pub use container::Container;
pub use product::Product;
pub use usecase::ProductCrudUsecase;
