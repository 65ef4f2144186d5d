//! Authentication Handlers
//!
//! Handles login and token verification

use std::time::Duration;

use axum::{Extension, Json, extract::State};

use shared::client::{LoginRequest, LoginResponse, VerifyTokenResponse};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::AdminRepository;
use crate::utils::{ApiResponse, AppError, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Login handler
///
/// Authenticates administrator credentials and returns a JWT token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<ApiResponse<LoginResponse>> {
    let username = req.username.trim().to_string();

    let repo = AdminRepository::new(state.get_db());
    let admin = repo
        .find_by_username(&username)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message to prevent username enumeration
    let admin = match admin {
        Some(a) if a.verify_password(&req.password) => a,
        _ => {
            tracing::warn!(username = %username, "Login failed - invalid credentials");
            return Err(AppError::invalid_credentials());
        }
    };

    let jwt_service = state.get_jwt_service();
    let user_id = admin.id.as_ref().map(|t| t.to_string()).unwrap_or_default();

    let token = jwt_service
        .generate_token(&user_id, &admin.username)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(username = %admin.username, "Administrator logged in");

    Ok(ApiResponse::success(LoginResponse {
        token,
        username: admin.username,
    }))
}

/// Verify the bearer token and return who it belongs to.
///
/// Reaching this handler means [`crate::auth::require_auth`] already
/// accepted the token.
pub async fn verify_token(
    Extension(user): Extension<CurrentUser>,
) -> ApiResponse<VerifyTokenResponse> {
    ApiResponse::success_with_message(
        "Token valid",
        VerifyTokenResponse {
            username: user.username,
        },
    )
}
