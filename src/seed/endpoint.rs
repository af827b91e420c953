//! Defines the route handler that seeds the transaction table.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::{AppState, Error, transaction::insert_transactions};

use super::fetch::fetch_seed_records;

/// The response body for a successful seeding run.
#[derive(Debug, Serialize)]
pub(crate) struct SeedOutcome {
    message: String,
}

/// Handle requests to seed the transaction table from the external resource.
///
/// Seeding appends to the table: it does not clear existing data, so calling
/// the endpoint twice stores every record twice.
pub(crate) async fn initialize_endpoint(
    State(state): State<AppState>,
) -> Result<Json<SeedOutcome>, Error> {
    let records = fetch_seed_records(&state.seed_url).await?;

    let inserted = insert_transactions(records, &state.db_connection.lock().unwrap())?;

    tracing::info!("Seeded {inserted} product transactions.");

    Ok(Json(SeedOutcome {
        message: format!("Database initialized with {inserted} transactions"),
    }))
}

#[cfg(test)]
mod initialize_endpoint_tests {
    use axum::{Router, http::StatusCode, routing::get};
    use axum_test::TestServer;
    use rusqlite::Connection;

    use crate::{AppState, endpoints};

    use super::initialize_endpoint;

    #[tokio::test]
    async fn unreachable_seed_source_reports_server_error() {
        let conn = Connection::open_in_memory().unwrap();
        // Port 1 is never listening, so the fetch fails immediately.
        let state = AppState::new(conn, "http://127.0.0.1:1/product_transaction.json").unwrap();
        let app = Router::new()
            .route(endpoints::INITIALIZE, get(initialize_endpoint))
            .with_state(state.clone());
        let server = TestServer::try_new(app).expect("Could not create test server.");

        let response = server.get(endpoints::INITIALIZE).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Failed to initialize the database");
        assert!(body["error"].is_string());

        // The failed fetch must leave the store untouched.
        let count: usize = state
            .db_connection
            .lock()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM product_transaction", [], |row| {
                row.get::<_, i64>(0).map(|n| n as usize)
            })
            .unwrap();
        assert_eq!(count, 0);
    }
}
