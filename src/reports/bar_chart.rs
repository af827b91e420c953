//! The monthly price histogram report.

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

/// The fixed price buckets, as (label, inclusive upper bound) pairs in
/// ascending order. The last bucket has no upper bound.
const PRICE_BUCKETS: [(&str, f64); 10] = [
    ("0-100", 100.0),
    ("101-200", 200.0),
    ("201-300", 300.0),
    ("301-400", 400.0),
    ("401-500", 500.0),
    ("501-600", 600.0),
    ("601-700", 700.0),
    ("701-800", 800.0),
    ("801-900", 900.0),
    ("901-above", f64::INFINITY),
];

/// The number of transactions that fell into one price bucket.
#[derive(Debug, PartialEq, Serialize)]
pub(crate) struct BucketCount {
    /// The bucket's price range label, e.g. "101-200".
    pub(crate) range: &'static str,
    /// How many in-range transactions fell into the bucket.
    pub(crate) count: usize,
}

/// Count the transactions sold within `range` by price bucket.
///
/// Each transaction lands in the first bucket whose upper bound is at least
/// its price, so a price of exactly 100 counts towards "0-100". All ten
/// buckets are returned in ascending order, zero counts included.
///
/// # Errors
/// Returns an [Error::SqlError] if there is a SQL error.
pub(crate) fn price_histogram(
    range: &RangeInclusive<OffsetDateTime>,
    connection: &Connection,
) -> Result<Vec<BucketCount>, Error> {
    let prices = connection
        .prepare("SELECT price FROM product_transaction WHERE date_of_sale BETWEEN ?1 AND ?2")?
        .query_map(
            [sale_date_text(*range.start()), sale_date_text(*range.end())],
            |row| row.get(0),
        )?
        .collect::<Result<Vec<f64>, _>>()?;

    let mut counts = [0usize; PRICE_BUCKETS.len()];

    for price in prices {
        counts[bucket_index(price)] += 1;
    }

    Ok(PRICE_BUCKETS
        .iter()
        .zip(counts)
        .map(|(&(range, _), count)| BucketCount { range, count })
        .collect())
}

fn bucket_index(price: f64) -> usize {
    PRICE_BUCKETS
        .iter()
        .position(|&(_, upper)| price <= upper)
        .unwrap_or(PRICE_BUCKETS.len() - 1)
}

/// Handle requests for the monthly price histogram report.
pub(crate) async fn bar_chart_endpoint(
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> Result<Json<Vec<BucketCount>>, Error> {
    let range = resolve_report_range(&month)?;

    let connection = state.db_connection.lock().unwrap();
    let histogram = price_histogram(&range, &connection)?;

    Ok(Json(histogram))
}
