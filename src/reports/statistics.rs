//! The monthly sales statistics report.

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

/// The sales statistics for one report month.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Statistics {
    /// The sum of the prices of the items sold in the month.
    pub(crate) total_sales: f64,
    /// The number of items sold in the month.
    pub(crate) sold_items: usize,
    /// The number of items sold before the month started.
    ///
    /// The name is kept from the report shape this service replaces; it does
    /// not mean "items without a sale date".
    pub(crate) not_sold_items: usize,
}

/// Compute the sales statistics for transactions sold within `range`.
///
/// `total_sales` is 0 when no transaction falls inside the range.
///
/// # Errors
/// Returns an [Error::SqlError] if there is a SQL error.
pub(crate) fn monthly_statistics(
    range: &RangeInclusive<OffsetDateTime>,
    connection: &Connection,
) -> Result<Statistics, Error> {
    let (sold_items, total_sales) = connection
        .prepare(
            "SELECT COUNT(*), COALESCE(SUM(price), 0.0) FROM product_transaction \
             WHERE date_of_sale BETWEEN ?1 AND ?2",
        )?
        .query_row(
            [sale_date_text(*range.start()), sale_date_text(*range.end())],
            |row| Ok((row.get::<_, i64>(0)? as usize, row.get(1)?)),
        )?;

    let not_sold_items = connection
        .prepare("SELECT COUNT(*) FROM product_transaction WHERE date_of_sale < ?1")?
        .query_row([sale_date_text(*range.start())], |row| {
            Ok(row.get::<_, i64>(0)? as usize)
        })?;

    Ok(Statistics {
        total_sales,
        sold_items,
        not_sold_items,
    })
}

/// Handle requests for the monthly sales statistics report.
pub(crate) async fn statistics_endpoint(
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> Result<Json<Statistics>, Error> {
    let range = resolve_report_range(&month)?;

    let connection = state.db_connection.lock().unwrap();
    let statistics = monthly_statistics(&range, &connection)?;

    Ok(Json(statistics))
}
