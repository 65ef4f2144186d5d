//! Employee repository against a real embedded database
//! Run: cargo test -p roster-server --test employee_repository -- --nocapture

use std::time::Duration;

use roster_server::db::DbService;
use roster_server::db::repository::{EmployeeRepository, RepoError};
use shared::client::EmployeeInput;
use shared::models::employee::EmployeeStatus;

async fn open_repo(tmp: &tempfile::TempDir) -> EmployeeRepository {
    let service = DbService::new(tmp.path().to_str().unwrap()).await.unwrap();
    EmployeeRepository::new(service.db.clone())
}

fn input(name: &str, email: &str) -> EmployeeInput {
    EmployeeInput {
        name: name.to_string(),
        email: email.to_string(),
        mobile: "9876543210".to_string(),
        designation: "HR".to_string(),
        gender: "M".to_string(),
        course: vec!["MCA".to_string()],
        image: None,
    }
}

#[tokio::test]
async fn create_assigns_numbers_and_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let repo = open_repo(&tmp).await;

    let first = repo
        .create(&input("Hukum Gupta", "HUKUM@Example.com"))
        .await
        .unwrap();
    let second = repo
        .create(&input("Manish Sharma", "manish@example.com"))
        .await
        .unwrap();

    assert_eq!(first.employee_id, 1);
    assert_eq!(second.employee_id, 2);
    assert!(first.id.is_some());
    // email is stored lowercased
    assert_eq!(first.email, "hukum@example.com");
    assert_eq!(first.status, EmployeeStatus::Active);
}

#[tokio::test]
async fn duplicate_email_is_rejected_case_folded() {
    let tmp = tempfile::tempdir().unwrap();
    let repo = open_repo(&tmp).await;

    repo.create(&input("Jane", "jane@example.com")).await.unwrap();

    let exact = repo
        .create(&input("Other", "jane@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(exact, RepoError::Duplicate(_)));

    let folded = repo
        .create(&input("Other", "JANE@EXAMPLE.COM"))
        .await
        .unwrap_err();
    assert!(matches!(folded, RepoError::Duplicate(_)));

    // rejected creates never reached the allocator
    let next = repo
        .create(&input("After", "after@example.com"))
        .await
        .unwrap();
    assert_eq!(next.employee_id, 2);
}

#[tokio::test]
async fn update_keeps_own_email_and_rejects_foreign() {
    let tmp = tempfile::tempdir().unwrap();
    let repo = open_repo(&tmp).await;

    let jane = repo.create(&input("Jane", "jane@example.com")).await.unwrap();
    repo.create(&input("John", "john@example.com")).await.unwrap();

    let jane_id = jane.id.unwrap().to_string();

    let updated = repo
        .update(&jane_id, &input("Jane Doe", "jane@example.com"))
        .await
        .unwrap();
    assert_eq!(updated.name, "Jane Doe");

    let err = repo
        .update(&jane_id, &input("Jane Doe", "john@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));
}

#[tokio::test]
async fn update_never_touches_number_or_creation_date() {
    let tmp = tempfile::tempdir().unwrap();
    let repo = open_repo(&tmp).await;

    let created = repo.create(&input("Jane", "jane@example.com")).await.unwrap();
    let id = created.id.clone().unwrap().to_string();

    let updated = repo
        .update(&id, &input("Jane Doe", "jane.doe@example.com"))
        .await
        .unwrap();

    assert_eq!(updated.email, "jane.doe@example.com");
    assert_eq!(updated.employee_id, created.employee_id);
    assert_eq!(updated.created_date, created.created_date);
}

#[tokio::test]
async fn update_unknown_record_is_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    let repo = open_repo(&tmp).await;

    let err = repo
        .update("employee:doesnotexist", &input("Jane", "jane@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn status_round_trip_and_invalid_value() {
    let tmp = tempfile::tempdir().unwrap();
    let repo = open_repo(&tmp).await;

    let created = repo.create(&input("Jane", "jane@example.com")).await.unwrap();
    let id = created.id.unwrap().to_string();

    let inactive = repo.set_status(&id, "Inactive").await.unwrap();
    assert_eq!(inactive.status, EmployeeStatus::Inactive);

    let active = repo.set_status(&id, " Active ").await.unwrap();
    assert_eq!(active.status, EmployeeStatus::Active);

    let err = repo.set_status(&id, "Retired").await.unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[tokio::test]
async fn delete_then_lookups_miss() {
    let tmp = tempfile::tempdir().unwrap();
    let repo = open_repo(&tmp).await;

    let created = repo.create(&input("Jane", "jane@example.com")).await.unwrap();
    let id = created.id.unwrap().to_string();

    assert!(repo.delete(&id).await.unwrap());
    assert!(repo.find_by_id(&id).await.unwrap().is_none());
    assert!(!repo.delete(&id).await.unwrap());
}

#[tokio::test]
async fn list_is_newest_first() {
    let tmp = tempfile::tempdir().unwrap();
    let repo = open_repo(&tmp).await;

    for (name, email) in [
        ("First", "first@example.com"),
        ("Second", "second@example.com"),
        ("Third", "third@example.com"),
    ] {
        repo.create(&input(name, email)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let all = repo.find_all().await.unwrap();
    let emails: Vec<&str> = all.iter().map(|e| e.email.as_str()).collect();
    assert_eq!(
        emails,
        vec![
            "third@example.com",
            "second@example.com",
            "first@example.com"
        ]
    );
}

#[tokio::test]
async fn malformed_ids_are_invalid() {
    let tmp = tempfile::tempdir().unwrap();
    let repo = open_repo(&tmp).await;

    let err = repo.find_by_id("not-a-record-id").await.unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    // record ids from other tables cannot address employees
    let err = repo.find_by_id("admin:someone").await.unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[tokio::test]
async fn invalid_input_reports_every_field() {
    let tmp = tempfile::tempdir().unwrap();
    let repo = open_repo(&tmp).await;

    let mut bad = input("", "not-an-email");
    bad.course = vec![];

    let err = repo.create(&bad).await.unwrap_err();
    let RepoError::Validation(errors) = err else {
        panic!("expected a validation error");
    };

    let fields: Vec<&str> = errors.violations.iter().map(|v| v.field).collect();
    assert_eq!(fields, vec!["name", "email", "course"]);
}
