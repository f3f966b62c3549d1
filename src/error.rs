//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use utoipa::ToSchema;

/// Entity kinds that can be reported missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Character,
    Planet,
    User,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Character => "Character",
            Resource::Planet => "Planet",
            Resource::User => "User",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(Resource),
    #[error("Favorite already exists")]
    FavoriteExists,
    /// Generic application error carrying its own status code.
    #[error("{message}")]
    Api { status: StatusCode, message: String },
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn api(status: StatusCode, message: impl Into<String>) -> Self {
        AppError::Api {
            status,
            message: message.into(),
        }
    }

    /// Same answer for unknown routes and path ids that are not positive integers.
    pub fn route_not_found() -> Self {
        Self::api(StatusCode::NOT_FOUND, "Not Found")
    }
}

/// Body of a 404 for a missing entity.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of every other error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            AppError::FavoriteExists => (
                StatusCode::BAD_REQUEST,
                Json(MessageBody {
                    message: self.to_string(),
                }),
            )
                .into_response(),
            AppError::Api { status, message } => (status, Json(MessageBody { message })).into_response(),
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageBody {
                        message: "Internal server error".into(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
