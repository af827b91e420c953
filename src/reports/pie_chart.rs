//! The monthly category breakdown report.

use std::ops::RangeInclusive;

use axum::{
    Json,
    extract::{Path, State},
};
use rusqlite::Connection;
use serde::Serialize;
use time::OffsetDateTime;

use crate::{AppState, Error, transaction::sale_date_text};

use super::month::resolve_report_range;

/// The number of transactions in one product category.
#[derive(Debug, PartialEq, Serialize)]
pub(crate) struct CategoryCount {
    /// The product category label.
    pub(crate) category: String,
    /// How many in-range transactions belong to the category.
    pub(crate) count: usize,
}

/// Count the transactions sold within `range` per product category.
///
/// Categories with no in-range transactions are omitted. The output is
/// ordered by category name to keep responses deterministic.
///
/// # Errors
/// Returns an [Error::SqlError] if there is a SQL error.
pub(crate) fn category_counts(
    range: &RangeInclusive<OffsetDateTime>,
    connection: &Connection,
) -> Result<Vec<CategoryCount>, Error> {
    connection
        .prepare(
            "SELECT category, COUNT(*) FROM product_transaction \
             WHERE date_of_sale BETWEEN ?1 AND ?2 \
             GROUP BY category ORDER BY category",
        )?
        .query_map(
            [sale_date_text(*range.start()), sale_date_text(*range.end())],
            |row| {
                Ok(CategoryCount {
                    category: row.get(0)?,
                    count: row.get::<_, i64>(1)? as usize,
                })
            },
        )?
        .map(|maybe_count| maybe_count.map_err(Error::SqlError))
        .collect()
}

/// Handle requests for the monthly category breakdown report.
pub(crate) async fn pie_chart_endpoint(
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> Result<Json<Vec<CategoryCount>>, Error> {
    let range = resolve_report_range(&month)?;

    let connection = state.db_connection.lock().unwrap();
    let counts = category_counts(&range, &connection)?;

    Ok(Json(counts))
}
