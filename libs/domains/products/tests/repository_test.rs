//! Repository tests for the MongoDB ProductRepository
//!
//! These run against a real MongoDB container and verify persistence
//! behavior: round-trips, replacements, and deletes.

use domain_products::models::{CreateProduct, UpdateProduct};
use domain_products::mongodb::MongoProductRepository;
use domain_products::repository::ProductRepository;
use test_utils::{
    TestDataBuilder, TestMongo,
    assertions::{assert_some, assert_uuid_eq},
};

#[tokio::test]
async fn test_create_and_get_round_trip() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(mongo.database("products_repo_test"));
    let builder = TestDataBuilder::from_test_name("repo_round_trip");

    let created = repo
        .create(CreateProduct {
            name: builder.name("product", "round-trip"),
            price: 12.5,
        })
        .await
        .unwrap();

    let found = repo.get_by_id(created.id).await.unwrap();
    let found = assert_some(found, "get after create");

    assert_uuid_eq(found.id, created.id, "round-trip id");
    assert_eq!(found.name, builder.name("product", "round-trip"));
    assert_eq!(found.price, 12.5);
}

#[tokio::test]
async fn test_get_by_id_returns_none_for_unknown() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(mongo.database("products_repo_test"));
    let builder = TestDataBuilder::from_test_name("repo_get_unknown");

    let found = repo.get_by_id(builder.id()).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_list_returns_all_inserted() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(mongo.database("products_repo_test"));
    let builder = TestDataBuilder::from_test_name("repo_list_all");

    for suffix in ["a", "b", "c"] {
        repo.create(CreateProduct {
            name: builder.name("product", suffix),
            price: 1.0,
        })
        .await
        .unwrap();
    }

    let products = repo.list().await.unwrap();
    assert_eq!(products.len(), 3);

    let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
    for suffix in ["a", "b", "c"] {
        assert!(names.contains(&builder.name("product", suffix).as_str()));
    }
}

#[tokio::test]
async fn test_update_returns_post_image() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(mongo.database("products_repo_test"));
    let builder = TestDataBuilder::from_test_name("repo_update");

    let created = repo
        .create(CreateProduct {
            name: builder.name("product", "before"),
            price: 10.0,
        })
        .await
        .unwrap();

    let updated = repo
        .update(
            created.id,
            UpdateProduct {
                name: builder.name("product", "after"),
                price: 20.0,
            },
        )
        .await
        .unwrap();
    let updated = assert_some(updated, "update existing");

    assert_uuid_eq(updated.id, created.id, "update keeps id");
    assert_eq!(updated.name, builder.name("product", "after"));
    assert_eq!(updated.price, 20.0);

    // Replacement is persisted
    let stored = assert_some(repo.get_by_id(created.id).await.unwrap(), "get after update");
    assert_eq!(stored.name, builder.name("product", "after"));
    assert_eq!(stored.price, 20.0);
}

#[tokio::test]
async fn test_update_returns_none_for_unknown() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(mongo.database("products_repo_test"));
    let builder = TestDataBuilder::from_test_name("repo_update_unknown");

    let updated = repo
        .update(
            builder.id(),
            UpdateProduct {
                name: "Widget".to_string(),
                price: 1.0,
            },
        )
        .await
        .unwrap();

    assert!(updated.is_none());
}

#[tokio::test]
async fn test_delete_returns_true_then_false() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(mongo.database("products_repo_test"));
    let builder = TestDataBuilder::from_test_name("repo_delete");

    let created = repo
        .create(CreateProduct {
            name: builder.name("product", "delete"),
            price: 2.0,
        })
        .await
        .unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert!(repo.get_by_id(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_zero_price_round_trips() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(mongo.database("products_repo_test"));
    let builder = TestDataBuilder::from_test_name("repo_zero_price");

    let created = repo
        .create(CreateProduct {
            name: builder.name("product", "free"),
            price: 0.0,
        })
        .await
        .unwrap();

    let found = assert_some(repo.get_by_id(created.id).await.unwrap(), "get zero price");
    assert_eq!(found.price, 0.0);
}

#[tokio::test]
async fn test_connector_and_health_against_container() {
    let mongo = TestMongo::new().await;

    let client = database::mongodb::connect(&mongo.connection_string)
        .await
        .expect("connect to test container");

    assert!(database::mongodb::check_health(&client).await);

    let status = database::mongodb::check_health_detailed(&client).await;
    assert!(status.healthy);
    assert!(status.message.is_none());
}
