use crate::{database::UserRepository, models::User, utils::AppError};
use serde::Serialize;
use serde_json::Value;

// Request/Response structures
#[derive(Debug, Default, utoipa::ToSchema)]
pub struct LoginRequest {
    /// Anything but a non-empty string is rejected
    #[schema(value_type = Option<String>, example = "1234567890")]
    pub mobile: Option<Value>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub user: User,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UnauthorizedResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl LoginRequest {
    /// Reads `mobile` from a JSON object body. Any other JSON value carries no fields.
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Object(mut fields) => Self {
                mobile: fields.remove("mobile"),
            },
            _ => Self::default(),
        }
    }

    /// The mobile number, if present as a non-empty string
    pub fn mobile(&self) -> Option<&str> {
        match &self.mobile {
            Some(Value::String(mobile)) if !mobile.is_empty() => Some(mobile.as_str()),
            _ => None,
        }
    }
}

/// Looks up the user owning `request.mobile`
pub async fn login(repo: &dyn UserRepository, request: &LoginRequest) -> Result<User, AppError> {
    let mobile = request.mobile().ok_or(AppError::Validation)?;

    let mut users = repo.find_user_by_mobile(mobile).await?;

    if users.len() > 1 {
        log::warn!(
            "⚠️  {} users share one mobile number, using id {}",
            users.len(),
            users[0].id
        );
    }

    if users.is_empty() {
        return Err(AppError::Unauthorized);
    }

    Ok(users.swap_remove(0))
}
