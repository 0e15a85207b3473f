//! Shared wire DTOs for the platform API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the platform API's JSON payloads so serde round-trips
//! stay lossless. The client treats them as read-only cached copies; the API
//! owns the data.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Platform role attached to a user account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full platform administration rights.
    Admin,
    /// Regular organisation member.
    #[default]
    User,
}

impl Role {
    /// Wire value, also used as a display label in account chrome.
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

/// The authenticated account as returned by `GET /users/me` and `GET /users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Login email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Platform role driving admin-only screens.
    pub role: Role,
}

/// An organisation the caller can see, from `GET /organisations`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Organisation {
    /// Unique organisation identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Which viewer asset family a route or file request addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    /// Conventional 3D model (glTF/GLB pipeline).
    Model,
    /// Gaussian splat capture.
    Splat,
}

impl AssetKind {
    /// API path segment for this asset family.
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Model => "models",
            Self::Splat => "splats",
        }
    }

    /// Human-readable label for list chrome.
    pub fn label(self) -> &'static str {
        match self {
            Self::Model => "Model",
            Self::Splat => "Splat",
        }
    }
}

/// A model or splat summary inside an organisation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Unique asset identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Owning organisation (UUID string).
    pub organisation_id: String,
}

/// Credentials payload for `POST /auth/login`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response carrying the bearer token.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Payload for `POST /users` (admin user creation).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: String,
    pub role: Role,
}
