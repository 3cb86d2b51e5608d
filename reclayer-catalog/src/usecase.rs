//! CRUD use-case for catalog products.
//!
//! [`ProductCrudUsecase`] sits between callers and a [`RecordStore<Product>`]: it turns untyped
//! inputs into validated products and queries, forwards them to the store, and hands every
//! store error back to the caller unchanged.

use tracing::debug;

use reclayer::prelude::*;

use crate::product::Product;

/// Product use-case for store-backed CRUD operations.
///
/// The use-case owns its store exclusively. Any `RecordStore<Product>` is accepted; handing in
/// something that does not satisfy the contract is a compile error.
#[derive(Debug)]
pub struct ProductCrudUsecase<S: RecordStore<Product>> {
    store: S,
}

impl<S: RecordStore<Product>> ProductCrudUsecase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates a new product from an untyped map and adds it to the store.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `data` is not a map
    /// - `Validation` if the data does not make a valid product
    /// - whatever the store's `create` returns, e.g. `DuplicateKey`
    pub fn create_product(&self, data: impl IntoFields) -> RecordStoreResult<Product> {
        let product = Product::from_data(data)?;
        debug!(id = product.id(), "creating product");

        self.store.create(product.clone())?;

        Ok(product)
    }

    /// Returns the first product matching `query`, if any.
    pub fn get_product(&self, query: impl IntoQuery) -> RecordStoreResult<Option<Product>> {
        let query = query.into_query()?;
        debug!(?query, "getting product");

        self.store.read_one(&query)
    }

    /// Returns every product matching `query`, in insertion order.
    pub fn get_products(&self, query: impl IntoQuery) -> RecordStoreResult<Vec<Product>> {
        let query = query.into_query()?;
        debug!(?query, "getting products");

        self.store.read_many(&query)
    }

    /// Replaces the stored product with the same id. Does nothing if there is none.
    pub fn update_product(&self, product: Product) -> RecordStoreResult<()> {
        debug!(id = product.id(), "updating product");

        self.store.update(product)
    }

    /// Deletes every product matching `query`.
    pub fn delete_product(&self, query: impl IntoQuery) -> RecordStoreResult<()> {
        let query = query.into_query()?;
        debug!(?query, "deleting products");

        self.store.delete(&query)
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the use-case and returns its store.
    pub fn into_store(self) -> S {
        self.store
    }
}
