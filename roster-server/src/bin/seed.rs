//! Seed tool - provisions administrator accounts and demo data
//!
//! Usage:
//!   seed admin <username> <password>
//!   seed demo

use roster_server::db::models::Admin;
use roster_server::db::repository::{AdminRepository, EmployeeRepository, RepoError};
use roster_server::{Config, ServerState, init_logger};
use shared::client::EmployeeInput;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    init_logger();

    let args: Vec<String> = std::env::args().collect();

    let config = Config::from_env();
    let state = ServerState::initialize(&config).await?;

    match args.get(1).map(String::as_str) {
        Some("admin") => {
            let (Some(username), Some(password)) = (args.get(2), args.get(3)) else {
                eprintln!("Usage: seed admin <username> <password>");
                std::process::exit(2);
            };
            seed_admin(&state, username, password).await?;
        }
        Some("demo") => {
            seed_demo(&state).await?;
        }
        _ => {
            eprintln!("Usage: seed admin <username> <password> | seed demo");
            std::process::exit(2);
        }
    }

    Ok(())
}

async fn seed_admin(
    state: &ServerState,
    username: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let hash = Admin::hash_password(password)?;
    let repo = AdminRepository::new(state.get_db());
    let admin = repo.upsert(username, &hash).await?;

    tracing::info!(username = %admin.username, "Administrator provisioned");
    Ok(())
}

/// Inserts demo employees through the repository so allocation, validation
/// and uniqueness run exactly as in production. Re-running skips records
/// whose email already exists.
async fn seed_demo(state: &ServerState) -> Result<(), Box<dyn std::error::Error>> {
    let repo = EmployeeRepository::new(state.get_db());

    let demo = [
        ("Hukum Gupta", "hukum@example.com", "9876543210", "HR", "M", vec!["MCA"]),
        ("Manish Sharma", "manish@example.com", "9876543211", "Manager", "M", vec!["BCA"]),
        ("Yash Verma", "yash@example.com", "9876543212", "Sales", "M", vec!["BSC"]),
        ("Priya Singh", "priya@example.com", "9876543213", "HR", "F", vec!["MCA", "BCA"]),
    ];

    for (name, email, mobile, designation, gender, course) in demo {
        let input = EmployeeInput {
            name: name.to_string(),
            email: email.to_string(),
            mobile: mobile.to_string(),
            designation: designation.to_string(),
            gender: gender.to_string(),
            course: course.into_iter().map(String::from).collect(),
            image: None,
        };

        match repo.create(&input).await {
            Ok(employee) => {
                tracing::info!(
                    employee_id = employee.employee_id,
                    email = %employee.email,
                    "Demo employee created"
                );
            }
            Err(RepoError::Duplicate(_)) => {
                tracing::info!(email = %email, "Demo employee already present, skipped");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
