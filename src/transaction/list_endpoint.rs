//! Defines the route handler for listing and searching transactions.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::{AppState, Error};

use super::{
    core::Transaction,
    query::{TransactionSearch, search_transactions},
};

/// The query parameters accepted by the transaction listing endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct ListParams {
    /// The 1-based page index.
    #[serde(default = "default_page")]
    page: u64,
    /// The maximum number of transactions per page.
    #[serde(default = "default_per_page", rename = "perPage")]
    per_page: u64,
    /// Free-text search over the title, description, and price fields.
    #[serde(default)]
    search: String,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    10
}

/// The response body for the transaction listing endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct ListResponse {
    transactions: Vec<Transaction>,
    total: usize,
}

/// Handle requests for a paged, filtered list of transactions.
pub(crate) async fn list_transactions_endpoint(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse>, Error> {
    let search = TransactionSearch {
        page: params.page,
        per_page: params.per_page,
        search: params.search,
    };

    let connection = state.db_connection.lock().unwrap();
    let page = search_transactions(&search, &connection)?;

    Ok(Json(ListResponse {
        transactions: page.transactions,
        total: page.total,
    }))
}
