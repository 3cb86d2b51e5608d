//! Composition root wiring the catalog together.

use tracing::debug;

use reclayer::{memory::InMemoryStore, prelude::*};

use crate::{config::CatalogConfig, product::Product, usecase::ProductCrudUsecase};

/// Owns the product store and the use-case built on top of it.
///
/// By default the store is an [`InMemoryStore`]; [`Container::with_store`] accepts any other
/// `RecordStore<Product>`.
#[derive(Debug)]
pub struct Container<S: RecordStore<Product> = InMemoryStore<Product>> {
    usecase: ProductCrudUsecase<S>,
}

impl Container {
    /// Builds an empty in-memory product store and the use-case owning it.
    pub fn new(config: &CatalogConfig) -> RecordStoreResult<Self> {
        let store = InMemoryStore::<Product>::builder()
            .with_capacity(config.capacity)
            .build()?;
        debug!(capacity = config.capacity, "built in-memory product store");

        Ok(Self::with_store(store))
    }
}

impl<S: RecordStore<Product>> Container<S> {
    pub fn with_store(store: S) -> Self {
        Self {
            usecase: ProductCrudUsecase::new(store),
        }
    }

    pub fn usecase(&self) -> &ProductCrudUsecase<S> {
        &self.usecase
    }

    pub fn into_usecase(self) -> ProductCrudUsecase<S> {
        self.usecase
    }
}
