//! User wire models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use bazaar::{User, UserDraft};

/// Sign-up request
#[derive(Debug, Deserialize, ToSchema)]
pub struct SignupRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    /// At least 6 characters
    pub password: Option<String>,
}

impl From<SignupRequest> for UserDraft {
    fn from(request: SignupRequest) -> Self {
        Self {
            username: request.username,
            email: request.email,
            password: request.password,
        }
    }
}

/// Login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserLinks {
    #[serde(rename = "self")]
    pub self_link: String,
    pub listings: String,
    pub categories: String,
}

/// User response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub links: UserLinks,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
            links: UserLinks {
                self_link: "/api/me".to_string(),
                listings: "/api/me/listings".to_string(),
                categories: "/api/me/categories".to_string(),
            },
        }
    }
}
