//! Administrator provisioning against a real embedded database
//! Run: cargo test -p roster-server --test admin_accounts -- --nocapture

use std::time::Duration;

use roster_server::db::DbService;
use roster_server::db::models::Admin;
use roster_server::db::repository::AdminRepository;

async fn open_repo(tmp: &tempfile::TempDir) -> AdminRepository {
    let service = DbService::new(tmp.path().to_str().unwrap()).await.unwrap();
    AdminRepository::new(service.db.clone())
}

#[tokio::test]
async fn upsert_then_find_verifies_password() {
    let tmp = tempfile::tempdir().unwrap();
    let repo = open_repo(&tmp).await;

    let hash = Admin::hash_password("hunter2!!").unwrap();
    repo.upsert("admin", &hash).await.unwrap();

    let admin = repo.find_by_username("admin").await.unwrap().unwrap();
    assert_eq!(admin.username, "admin");
    assert!(admin.verify_password("hunter2!!"));
    assert!(!admin.verify_password("wrong"));
}

#[tokio::test]
async fn unknown_username_is_none() {
    let tmp = tempfile::tempdir().unwrap();
    let repo = open_repo(&tmp).await;

    assert!(repo.find_by_username("ghost").await.unwrap().is_none());
}

#[tokio::test]
async fn reprovision_rotates_password_and_keeps_created_at() {
    let tmp = tempfile::tempdir().unwrap();
    let repo = open_repo(&tmp).await;

    let first = repo
        .upsert("admin", &Admin::hash_password("old-password").unwrap())
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(5)).await;

    let second = repo
        .upsert("admin", &Admin::hash_password("new-password").unwrap())
        .await
        .unwrap();
    assert_eq!(second.created_at, first.created_at);

    let admin = repo.find_by_username("admin").await.unwrap().unwrap();
    assert!(admin.verify_password("new-password"));
    assert!(!admin.verify_password("old-password"));
}
