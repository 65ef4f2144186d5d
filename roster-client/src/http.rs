//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::client::{
    ApiResponse, EmployeeInput, EmployeeResponse, LoginRequest, LoginResponse,
    StatusUpdateRequest, UploadUrlRequest, UploadUrlResponse, VerifyTokenResponse,
};

/// Public URL of an uploaded object in virtual-hosted S3 style.
///
/// This is the value stored on the employee record after a photo upload.
pub fn public_object_url(bucket: &str, region: &str, key: &str) -> String {
    format!("https://{bucket}.s3.{region}.amazonaws.com/{key}")
}

/// HTTP client for making network requests to the roster server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.get(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.put(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.patch(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.delete(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let message = Self::error_message(response.text().await?);
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(message)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(message)),
                _ => Err(ClientError::Internal(message)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    /// Pull the server's message out of an error envelope; fall back to the raw body
    fn error_message(body: String) -> String {
        serde_json::from_str::<ApiResponse<serde_json::Value>>(&body)
            .map(|envelope| envelope.message)
            .unwrap_or(body)
    }

    // ========== Auth API ==========

    /// Login with username and password
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        self.post::<ApiResponse<LoginResponse>, _>("/api/login", &request)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing login data".to_string()))
    }

    /// Check that the stored token is still accepted
    pub async fn verify_token(&self) -> ClientResult<VerifyTokenResponse> {
        self.get::<ApiResponse<VerifyTokenResponse>>("/api/verify-token")
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing token data".to_string()))
    }

    // ========== Employee API ==========

    /// List all employees, newest first
    pub async fn list_employees(&self) -> ClientResult<Vec<EmployeeResponse>> {
        self.get::<ApiResponse<Vec<EmployeeResponse>>>("/api/employees")
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing employee list".to_string()))
    }

    /// Fetch a single employee by record id
    pub async fn get_employee(&self, id: &str) -> ClientResult<EmployeeResponse> {
        self.get::<ApiResponse<EmployeeResponse>>(&format!("/api/employees/{id}"))
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing employee data".to_string()))
    }

    /// Create a new employee
    pub async fn create_employee(&self, input: &EmployeeInput) -> ClientResult<EmployeeResponse> {
        self.post::<ApiResponse<EmployeeResponse>, _>("/api/employees", input)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing employee data".to_string()))
    }

    /// Update an existing employee
    pub async fn update_employee(
        &self,
        id: &str,
        input: &EmployeeInput,
    ) -> ClientResult<EmployeeResponse> {
        self.put::<ApiResponse<EmployeeResponse>, _>(&format!("/api/employees/{id}"), input)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing employee data".to_string()))
    }

    /// Flip an employee between Active and Inactive
    pub async fn set_employee_status(
        &self,
        id: &str,
        status: &str,
    ) -> ClientResult<EmployeeResponse> {
        let request = StatusUpdateRequest {
            status: status.to_string(),
        };

        self.patch::<ApiResponse<EmployeeResponse>, _>(
            &format!("/api/employees/{id}/status"),
            &request,
        )
        .await?
        .data
        .ok_or_else(|| ClientError::InvalidResponse("Missing employee data".to_string()))
    }

    /// Delete an employee
    pub async fn delete_employee(&self, id: &str) -> ClientResult<()> {
        self.delete::<ApiResponse<()>>(&format!("/api/employees/{id}"))
            .await?;
        Ok(())
    }

    // ========== Upload API ==========

    /// Request a pre-signed upload target for a photo
    pub async fn request_upload_url(
        &self,
        filename: &str,
        content_type: &str,
    ) -> ClientResult<UploadUrlResponse> {
        let request = UploadUrlRequest {
            filename: filename.to_string(),
            content_type: content_type.to_string(),
        };

        self.post::<ApiResponse<UploadUrlResponse>, _>("/api/s3-url", &request)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing upload target".to_string()))
    }

    /// PUT raw image bytes to a pre-signed URL.
    ///
    /// The URL carries its signature in the query string; the request is sent
    /// without the Authorization header and must use the content type the URL
    /// was signed for.
    pub async fn upload_image(
        &self,
        url: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<()> {
        let response = self
            .client
            .put(url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(ClientError::Internal(format!(
                "Upload rejected with {status}: {text}"
            )));
        }

        Ok(())
    }

    /// Upload a photo end to end: request a pre-signed URL, PUT the bytes,
    /// and return the public object URL to store on the employee record.
    pub async fn upload_photo(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
        bucket: &str,
        region: &str,
    ) -> ClientResult<String> {
        let target = self.request_upload_url(filename, content_type).await?;
        self.upload_image(&target.url, content_type, bytes).await?;
        Ok(public_object_url(bucket, region, &target.key))
    }
}
