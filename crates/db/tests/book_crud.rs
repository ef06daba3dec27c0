//! Integration tests for book CRUD operations.
//!
//! Books store their payload in a JSONB column, so these tests also cover
//! the payload merge semantics of partial updates and the upsert path.

use sqlx::PgPool;
use uuid::Uuid;
use waypost_db::models::book::{BookData, UpdateBook};
use waypost_db::repositories::BookRepo;

fn new_book(title: &str) -> BookData {
    BookData {
        title: title.to_string(),
        genres: vec!["fiction".to_string()],
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_book(pool: PgPool) {
    let id = Uuid::new_v4();
    let book = BookRepo::create(&pool, id, &new_book("Dune"))
        .await
        .unwrap();

    assert_eq!(book.id, id);
    assert_eq!(book.data.title, "Dune");
    assert_eq!(book.data.genres, vec!["fiction"]);
    assert!(book.is_active);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update_merges_payload(pool: PgPool) {
    let created = BookRepo::create(&pool, Uuid::new_v4(), &new_book("Draft Title"))
        .await
        .unwrap();

    let updated = BookRepo::update(
        &pool,
        created.id,
        &UpdateBook {
            title: Some("Final Title".to_string()),
            genres: None,
        },
    )
    .await
    .unwrap()
    .expect("update should find the row");

    assert_eq!(updated.data.title, "Final Title");
    assert_eq!(
        updated.data.genres, created.data.genres,
        "omitted payload fields must survive the merge"
    );
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.modified_at > created.modified_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upsert_inserts_when_missing(pool: PgPool) {
    let id = Uuid::new_v4();
    let book = BookRepo::upsert(&pool, id, &new_book("Inserted")).await.unwrap();

    assert_eq!(book.id, id);
    assert_eq!(book.data.title, "Inserted");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upsert_replaces_existing_payload(pool: PgPool) {
    let id = Uuid::new_v4();
    let created = BookRepo::create(&pool, id, &new_book("Old")).await.unwrap();

    let replacement = BookData {
        title: "New".to_string(),
        genres: vec!["sci-fi".to_string(), "classic".to_string()],
    };
    let updated = BookRepo::upsert(&pool, id, &replacement).await.unwrap();

    assert_eq!(updated.id, id);
    assert_eq!(updated.data.title, "New");
    assert_eq!(updated.data.genres, vec!["sci-fi", "classic"]);
    assert_eq!(
        updated.created_at, created.created_at,
        "upsert must not reset created_at"
    );
    assert!(updated.modified_at > created.modified_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_all_and_active(pool: PgPool) {
    let a = BookRepo::create(&pool, Uuid::new_v4(), &new_book("A"))
        .await
        .unwrap();
    let b = BookRepo::create(&pool, Uuid::new_v4(), &new_book("B"))
        .await
        .unwrap();

    let active = BookRepo::list_active(&pool).await.unwrap();
    let all = BookRepo::list_all(&pool).await.unwrap();
    for id in [a.id, b.id] {
        assert!(active.iter().any(|bk| bk.id == id));
        assert!(all.iter().any(|bk| bk.id == id));
    }
}
