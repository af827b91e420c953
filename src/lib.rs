//! Salestats is a small web service that records product sale transactions
//! and serves endpoints to seed, search, and summarise them.
//!
//! This library provides a REST API that serves JSON responses.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde::Serialize;
use tokio::signal;

mod app_state;
mod db;
mod endpoints;
mod reports;
mod routing;
mod seed;
mod transaction;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The client asked for a report month that is not a full English month
    /// name. The client should retry with a name such as "january" or "March".
    #[error("\"{0}\" is not a valid month name")]
    UnknownMonth(String),

    /// Fetching or decoding the external seed data failed.
    ///
    /// Callers should pass in a description of the underlying network or
    /// parse error.
    #[error("could not fetch seed data: {0}")]
    SeedFetch(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(#[from] rusqlite::Error),
}

/// The JSON body used for all error responses.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Error::UnknownMonth(month) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message: format!("\"{month}\" is not a valid month name"),
                    error: None,
                },
            ),
            Error::SeedFetch(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    message: "Failed to initialize the database".to_owned(),
                    error: Some(detail),
                },
            ),
            Error::SqlError(error) => {
                tracing::error!("An unexpected error occurred: {}", error);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        message: "An unexpected error occurred".to_owned(),
                        error: Some(error.to_string()),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod error_response_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::Error;

    #[tokio::test]
    async fn unknown_month_renders_bad_request() {
        let response = Error::UnknownMonth("febtober".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

        assert_eq!(
            body,
            serde_json::json!({"message": "\"febtober\" is not a valid month name"})
        );
    }

    #[tokio::test]
    async fn seed_fetch_error_renders_internal_error_with_detail() {
        let response = Error::SeedFetch("connection refused".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "message": "Failed to initialize the database",
                "error": "connection refused"
            })
        );
    }
}
