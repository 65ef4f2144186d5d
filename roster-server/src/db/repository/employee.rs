//! Employee Repository
//!
//! Owns employee validation, display-number allocation and persistence.

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use shared::client::EmployeeInput;
use shared::models::employee::EmployeeStatus;

use super::counter::{CounterRepository, EMPLOYEE_NUMBER_COUNTER};
use super::{BaseRepository, RepoError, RepoResult, is_unique_violation, is_write_conflict};
use crate::db::models::{Employee, EmployeeCreate, validate_employee_input};
use crate::utils::validation::ValidationErrors;

/// Attempts before giving up when creates race on the unique email index
const CREATE_RETRY_LIMIT: usize = 3;

/// Repository for employee records
#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All employees, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee ORDER BY created_date DESC")
            .await?;

        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees)
    }

    /// Find an employee by its record ID string ("employee:xyz")
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let record_id = parse_employee_id(id)?;
        let employee: Option<Employee> = self.base.db().select(record_id).await?;
        Ok(employee)
    }

    async fn find_by_email(
        &self,
        email: &str,
        exclude: Option<&RecordId>,
    ) -> RepoResult<Option<Employee>> {
        let mut result = match exclude {
            Some(record_id) => {
                self.base
                    .db()
                    .query("SELECT * FROM employee WHERE email = $email AND id != $thing LIMIT 1")
                    .bind(("email", email.to_string()))
                    .bind(("thing", record_id.clone()))
                    .await?
            }
            None => {
                self.base
                    .db()
                    .query("SELECT * FROM employee WHERE email = $email LIMIT 1")
                    .bind(("email", email.to_string()))
                    .await?
            }
        };

        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// Validate the input, allocate a display number and persist the record.
    ///
    /// The unique index on email is the authoritative duplicate guard; the
    /// pre-check just gives the common case a clean answer. Creates that
    /// race on the same email lose against the index and report the same
    /// duplicate error.
    pub async fn create(&self, input: &EmployeeInput) -> RepoResult<Employee> {
        let draft = validate_employee_input(input).map_err(RepoError::Validation)?;

        if self.find_by_email(&draft.email, None).await?.is_some() {
            return Err(duplicate_email(&draft.email));
        }

        let counters = CounterRepository::new(self.base.db().clone());
        let number = counters.next(EMPLOYEE_NUMBER_COUNTER).await?;

        for _ in 0..CREATE_RETRY_LIMIT {
            match self.insert(number, &draft).await {
                Err(RepoError::Database(message)) if is_unique_violation(&message) => {
                    return Err(duplicate_email(&draft.email));
                }
                Err(RepoError::Database(message)) if is_write_conflict(&message) => {
                    tokio::task::yield_now().await;
                }
                other => return other,
            }
        }

        Err(RepoError::Database(format!(
            "Employee create for '{}' kept conflicting",
            draft.email
        )))
    }

    async fn insert(&self, employee_id: i64, draft: &EmployeeCreate) -> RepoResult<Employee> {
        let mut result = self
            .base
            .db()
            .query(
                "CREATE employee SET \
                     employee_id = $employee_id, \
                     name = $name, \
                     email = $email, \
                     mobile = $mobile, \
                     designation = $designation, \
                     gender = $gender, \
                     course = $course, \
                     image = $image, \
                     status = 'Active', \
                     created_date = time::now() \
                 RETURN AFTER",
            )
            .bind(("employee_id", employee_id))
            .bind(("name", draft.name.clone()))
            .bind(("email", draft.email.clone()))
            .bind(("mobile", draft.mobile.clone()))
            .bind(("designation", draft.designation))
            .bind(("gender", draft.gender))
            .bind(("course", draft.course.clone()))
            .bind(("image", draft.image.clone()))
            .await?;

        let created: Option<Employee> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    /// Replace the mutable fields of an employee.
    ///
    /// The display number and creation date are never part of the update
    /// statement, so they cannot change here.
    pub async fn update(&self, id: &str, input: &EmployeeInput) -> RepoResult<Employee> {
        let record_id = parse_employee_id(id)?;
        let draft = validate_employee_input(input).map_err(RepoError::Validation)?;

        if self
            .find_by_email(&draft.email, Some(&record_id))
            .await?
            .is_some()
        {
            return Err(duplicate_email(&draft.email));
        }

        let mut result = self
            .base
            .db()
            .query(
                "UPDATE $thing SET \
                     name = $name, \
                     email = $email, \
                     mobile = $mobile, \
                     designation = $designation, \
                     gender = $gender, \
                     course = $course, \
                     image = $image \
                 RETURN AFTER",
            )
            .bind(("thing", record_id))
            .bind(("name", draft.name.clone()))
            .bind(("email", draft.email.clone()))
            .bind(("mobile", draft.mobile.clone()))
            .bind(("designation", draft.designation))
            .bind(("gender", draft.gender))
            .bind(("course", draft.course.clone()))
            .bind(("image", draft.image.clone()))
            .await?;

        let updated: Option<Employee> = match result.take(0) {
            Ok(employee) => employee,
            Err(err) => {
                let message = err.to_string();
                if is_unique_violation(&message) {
                    return Err(duplicate_email(&draft.email));
                }
                return Err(RepoError::Database(message));
            }
        };

        updated.ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
    }

    /// Switch an employee between Active and Inactive
    pub async fn set_status(&self, id: &str, status: &str) -> RepoResult<Employee> {
        let record_id = parse_employee_id(id)?;
        let Some(status) = EmployeeStatus::parse(status.trim()) else {
            return Err(RepoError::Validation(ValidationErrors::single(
                "status",
                "Status must be Active or Inactive",
            )));
        };

        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET status = $status RETURN AFTER")
            .bind(("thing", record_id))
            .bind(("status", status))
            .await?;

        let updated: Option<Employee> = result.take(0)?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
    }

    /// Delete an employee, returning whether a record existed
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let record_id = parse_employee_id(id)?;

        let existing: Option<Employee> = self.base.db().select(record_id.clone()).await?;
        if existing.is_none() {
            return Ok(false);
        }

        let _: Option<Employee> = self.base.db().delete(record_id).await?;
        Ok(true)
    }
}

fn duplicate_email(email: &str) -> RepoError {
    RepoError::Duplicate(format!("Employee with email '{email}' already exists"))
}

/// Parse a path ID into an employee RecordId.
///
/// Only the employee table is accepted, so a record ID from another table
/// cannot address this repository.
fn parse_employee_id(id: &str) -> Result<RecordId, RepoError> {
    let invalid = || RepoError::Validation(ValidationErrors::single("id", format!("Invalid ID: {id}")));

    let record_id = id.parse::<RecordId>().map_err(|_| invalid())?;
    if record_id.table() != "employee" {
        return Err(invalid());
    }

    Ok(record_id)
}
