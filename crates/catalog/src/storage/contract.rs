//! Behavioral checks every `ProductRepository` backend must pass.
//!
//! Each backend's test module calls these against a fresh, empty store.

use catalog_core::product::ProductData;
use catalog_core::storage::{ProductPage, ProductRepository};

fn iphone() -> ProductData {
    ProductData::new("iPhone 12", "brand new", 1999.99)
}

pub async fn create_then_fetch(repo: &dyn ProductRepository) {
    let created = repo.create(&iphone()).await.unwrap();

    let fetched = repo.get_product(&created.id).await.unwrap();

    assert_eq!(fetched, Some(created));
}

pub async fn create_scenario(repo: &dyn ProductRepository) {
    let created = repo.create(&iphone()).await.unwrap();

    assert_eq!(created.name, "iPhone 12");
    assert_eq!(created.description, "brand new");
    assert_eq!(created.price, 1999.99);
    assert!(uuid::Uuid::parse_str(&created.id).is_ok());

    let all = repo.list_products().await.unwrap();
    assert_eq!(all, vec![created]);
}

pub async fn list_returns_all(repo: &dyn ProductRepository) {
    assert!(repo.list_products().await.unwrap().is_empty());

    let mut created = vec![
        repo.create(&iphone()).await.unwrap(),
        repo.create(&ProductData::new("Pixel 5", "refurbished", 499.0))
            .await
            .unwrap(),
        repo.create(&ProductData::new("Cable", "", 0.0)).await.unwrap(),
    ];

    let mut listed = repo.list_products().await.unwrap();
    listed.sort_by(|a, b| a.id.cmp(&b.id));
    created.sort_by(|a, b| a.id.cmp(&b.id));

    assert_eq!(listed, created);
}

pub async fn delete_then_fetch(repo: &dyn ProductRepository) {
    let created = repo.create(&iphone()).await.unwrap();

    assert!(repo.delete(&created.id).await.unwrap());
    assert_eq!(repo.get_product(&created.id).await.unwrap(), None);
    assert!(repo.list_products().await.unwrap().is_empty());
}

pub async fn delete_absent(repo: &dyn ProductRepository) {
    let kept = repo.create(&iphone()).await.unwrap();

    assert!(!repo.delete("no-such-product").await.unwrap());
    assert_eq!(repo.list_products().await.unwrap(), vec![kept]);
}

pub async fn update_preserves_identity(repo: &dyn ProductRepository) {
    let created = repo.create(&iphone()).await.unwrap();
    let replacement = ProductData::new("iPhone 12 Pro", "used", 899.5);

    let updated = repo
        .update(&created.id, &replacement)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.data(), replacement);
    assert_eq!(repo.get_product(&created.id).await.unwrap(), Some(updated));
}

pub async fn update_absent(repo: &dyn ProductRepository) {
    let result = repo.update("no-such-product", &iphone()).await.unwrap();

    assert_eq!(result, None);
    assert_eq!(repo.get_product("no-such-product").await.unwrap(), None);
    assert!(repo.list_products().await.unwrap().is_empty());
}

pub async fn pages_cover_all(repo: &dyn ProductRepository) {
    let mut created = Vec::new();
    for i in 0..5 {
        let data = ProductData::new(format!("Item {i}"), "", i as f64);
        created.push(repo.create(&data).await.unwrap().id);
    }

    let mut seen = Vec::new();
    let mut cursor: Option<String> = None;
    for _ in 0..10 {
        let page = repo.list_page(2, cursor.as_deref()).await.unwrap();
        assert!(page.products.len() <= 2);
        seen.extend(page.products.into_iter().map(|p| p.id));
        cursor = page.next_cursor;
        if cursor.is_none() {
            break;
        }
    }

    assert!(cursor.is_none(), "listing did not terminate");
    seen.sort();
    created.sort();
    assert_eq!(seen, created);
}

pub async fn empty_cursor_starts_from_beginning(repo: &dyn ProductRepository) {
    for i in 0..3 {
        let data = ProductData::new(format!("Item {i}"), "", i as f64);
        repo.create(&data).await.unwrap();
    }

    let from_start = repo.list_page(2, None).await.unwrap();
    let from_empty = repo.list_page(2, Some("")).await.unwrap();

    let ids = |page: &ProductPage| {
        let mut ids: Vec<String> = page.products.iter().map(|p| p.id.clone()).collect();
        ids.sort();
        ids
    };
    assert_eq!(from_empty.products.len(), 2);
    assert_eq!(ids(&from_empty), ids(&from_start));
    assert_eq!(from_empty.next_cursor.is_some(), from_start.next_cursor.is_some());
}
