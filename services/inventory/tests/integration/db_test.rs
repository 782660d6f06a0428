//! Runs against a live PostgreSQL:
//! `TEST_DATABASE_URL=postgres://… cargo test -p inventory --test integration -- --ignored`

use std::time::{SystemTime, UNIX_EPOCH};

use inventory::domain::repository::ItemRepository;
use inventory::domain::types::{Item, ItemStatus};
use inventory::infra::db::DbItemRepository;
use inventory_migration::Migrator;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;

async fn connect() -> Option<DbItemRepository> {
    let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return None;
    };
    let db = Database::connect(&url).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    Some(DbItemRepository { db })
}

fn unique_suffix() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos()
}

fn item(id: &str, name: &str, details: &str) -> Item {
    Item {
        id: id.into(),
        name: name.into(),
        category: "tools".into(),
        picture_url: String::new(),
        details: details.into(),
        location: "shelf a".into(),
        last_performed_by: 1,
        quantity: 1,
        status: ItemStatus::CheckedIn,
    }
}

#[tokio::test]
#[ignore = "needs TEST_DATABASE_URL"]
async fn should_insert_once_then_revive_after_delete() {
    let Some(repo) = connect().await else { return };
    let suffix = unique_suffix();
    let id = format!("db-{suffix}");
    let tag = format!("batch{suffix}");

    assert!(repo.insert(&item(&id, "Torque wrench", &tag)).await.unwrap());
    assert!(
        !repo.insert(&item(&id, "Duplicate", &tag)).await.unwrap(),
        "live row keeps the id"
    );
    assert!(repo.exists(&id).await.unwrap());

    let found = repo.search(&tag).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Torque wrench");

    assert!(
        repo.set_status(&id, ItemStatus::CheckedOut, 2)
            .await
            .unwrap()
    );
    assert_eq!(repo.soft_delete(&id, 2).await.unwrap(), 1);
    assert!(!repo.exists(&id).await.unwrap());
    assert!(repo.search(&tag).await.unwrap().is_empty());
    assert_eq!(repo.soft_delete(&id, 2).await.unwrap(), 0);

    assert!(
        repo.insert(&item(&id, "Socket set", &tag)).await.unwrap(),
        "deleted row is revived"
    );
    let revived = repo.search(&id).await.unwrap();
    assert_eq!(revived.len(), 1);
    assert_eq!(revived[0].name, "Socket set");
    assert_eq!(revived[0].status, ItemStatus::CheckedIn);
}

#[tokio::test]
#[ignore = "needs TEST_DATABASE_URL"]
async fn should_match_search_words_across_fields() {
    let Some(repo) = connect().await else { return };
    let suffix = unique_suffix();
    let id = format!("db-{suffix}");
    let word = format!("lathe{suffix}");

    repo.insert(&item(&id, &format!("Mini {word}"), "bench"))
        .await
        .unwrap();

    let by_word = repo.search(&word).await.unwrap();
    assert!(by_word.iter().any(|i| i.id == id));
    let by_id = repo.search(&id).await.unwrap();
    assert!(by_id.iter().any(|i| i.id == id));
    assert!(repo.search(&format!("absent{suffix}")).await.unwrap().is_empty());
}
