use reclayer::{bson::doc, prelude::*};
use serde_json::json;

use reclayer_catalog::{CatalogConfig, Container, Product};

fn container() -> Container {
    Container::new(&CatalogConfig::default()).unwrap()
}

fn seeded() -> Container {
    let container = container();
    let usecase = container.usecase();

    usecase.create_product(json!({ "id": 1, "name": "apple", "price": 2.99 })).unwrap();
    usecase.create_product(json!({ "id": 2, "name": "orange", "price": 3.99 })).unwrap();
    usecase.create_product(json!({ "id": 3, "name": "banana", "price": 2.99 })).unwrap();

    container
}

fn ids(products: &[Product]) -> Vec<i64> {
    products.iter().map(Product::id).collect()
}

#[test]
fn create_stores_the_serialized_product() {
    let container = container();

    let product = container
        .usecase()
        .create_product(json!({ "id": 1, "name": "apple", "price": 2.99 }))
        .unwrap();

    assert_eq!(product, Product::new(1, "apple", 2.99).unwrap());
    assert_eq!(
        container.usecase().store().records(),
        vec![doc! { "id": 1_i64, "name": "apple", "price": 2.99 }]
    );
}

#[test]
fn get_product_on_an_empty_catalog_finds_nothing() {
    let container = container();

    assert_eq!(container.usecase().get_product(json!({ "id": 1 })).unwrap(), None);
}

#[test]
fn get_product_returns_the_first_match() {
    let container = seeded();

    let found = container.usecase().get_product(json!({ "price": 2.99 })).unwrap();

    assert_eq!(found, Some(Product::new(1, "apple", 2.99).unwrap()));
}

#[test]
fn get_products_returns_matches_in_insertion_order() {
    let container = seeded();
    let usecase = container.usecase();

    assert_eq!(ids(&usecase.get_products(json!({ "price": 2.99 })).unwrap()), vec![1, 3]);
    assert_eq!(ids(&usecase.get_products(json!({})).unwrap()), vec![1, 2, 3]);
    assert!(usecase.get_products(json!({ "name": "kiwi fruit" })).unwrap().is_empty());
}

#[test]
fn update_replaces_the_product_with_the_same_id() {
    let container = seeded();
    let usecase = container.usecase();

    let apple = usecase.get_product(Query::by_id(1)).unwrap().unwrap();
    usecase.update_product(apple.with_price(8.99).unwrap()).unwrap();

    assert_eq!(
        usecase.get_product(Query::by_id(1)).unwrap().map(|product| product.price()),
        Some(8.99)
    );
    assert_eq!(ids(&usecase.get_products(Query::new()).unwrap()), vec![1, 2, 3]);
}

#[test]
fn update_of_an_unknown_id_changes_nothing() {
    let container = seeded();
    let before = container.usecase().store().records();

    container
        .usecase()
        .update_product(Product::new(42, "mango slices", 5.0).unwrap())
        .unwrap();

    assert_eq!(container.usecase().store().records(), before);
}

#[test]
fn delete_removes_exactly_the_matches() {
    let container = seeded();
    let usecase = container.usecase();

    usecase.delete_product(json!({ "id": 1 })).unwrap();
    assert_eq!(usecase.get_product(json!({ "id": 1 })).unwrap(), None);
    assert_eq!(ids(&usecase.get_products(Query::new()).unwrap()), vec![2, 3]);

    usecase.delete_product(json!({ "price": 2.99 })).unwrap();
    assert_eq!(ids(&usecase.get_products(Query::new()).unwrap()), vec![2]);

    usecase.delete_product(json!({ "id": 99 })).unwrap();
    assert_eq!(ids(&usecase.get_products(Query::new()).unwrap()), vec![2]);
}

#[test]
fn duplicate_create_fails_without_mutation() {
    let container = seeded();
    let before = container.usecase().store().records();

    let result = container
        .usecase()
        .create_product(json!({ "id": 2, "name": "blood orange", "price": 4.5 }));

    assert_eq!(
        result,
        Err(RecordStoreError::DuplicateKey { id: 2, collection: "products".to_string() })
    );
    assert_eq!(container.usecase().store().records(), before);
}

#[test]
fn invalid_input_never_reaches_the_store() {
    let container = container();
    let usecase = container.usecase();

    assert_eq!(
        usecase.create_product(json!({ "id": 0, "name": "apple", "price": 2.99 })),
        Err(RecordStoreError::Validation("'id' must be a positive integer".to_string()))
    );
    assert_eq!(
        usecase.create_product(doc! { "id": 1, "name": "abcd", "price": 2.99 }),
        Err(RecordStoreError::Validation(
            "'name' should be at least 5 characters long".to_string()
        ))
    );
    assert_eq!(
        usecase.create_product(json!({ "id": 1, "name": "apple", "price": 0 })),
        Product::new(1, "apple", 0.0)
    );
    assert!(matches!(
        usecase.get_product(json!("abcd")),
        Err(RecordStoreError::InvalidArgument(_))
    ));
    assert!(usecase.store().is_empty());
}

#[test]
fn created_products_read_back_equal() {
    let container = container();
    let usecase = container.usecase();

    let products = [
        Product::new(1, "apple", 2.99).unwrap(),
        Product::new(7, "  green tea  ", 0.5).unwrap(),
        Product::new(i64::MAX, "Smartphone", 699.99).unwrap(),
        Product::new(12, "whole watermelon", 1e6).unwrap(),
    ];

    for product in &products {
        let created = usecase.create_product(product.to_fields().unwrap()).unwrap();
        assert_eq!(&created, product);
    }

    for product in &products {
        assert_eq!(usecase.get_product(Query::by_id(product.id())).unwrap().as_ref(), Some(product));
    }
}
