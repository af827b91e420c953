//! Database query helpers for the transaction listing endpoint.

use rusqlite::{Connection, params_from_iter, types::Value};

use crate::Error;

use super::core::{Transaction, map_transaction_row};

/// Defines how transactions are searched and paged.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TransactionSearch {
    /// The 1-based page index.
    pub(crate) page: u64,
    /// The maximum number of transactions to return per page.
    pub(crate) per_page: u64,
    /// Free-text search applied to the title, description, and price fields.
    pub(crate) search: String,
}

impl Default for TransactionSearch {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
            search: String::new(),
        }
    }
}

/// One page of search results plus the total match count.
#[derive(Debug, PartialEq)]
pub(crate) struct TransactionPage {
    /// The transactions on the requested page.
    pub(crate) transactions: Vec<Transaction>,
    /// The total number of transactions matching the search, across all pages.
    pub(crate) total: usize,
}

/// Search for transactions and return the requested page slice along with the
/// total number of matching records.
///
/// The predicate is a logical OR of a case-insensitive substring match on the
/// title, the same match on the description, and an exact price match when the
/// search term parses as a number. An empty search term matches every record.
///
/// # Errors
/// Returns an [Error::SqlError] if there is a SQL error.
pub(crate) fn search_transactions(
    query: &TransactionSearch,
    connection: &Connection,
) -> Result<TransactionPage, Error> {
    let (where_clause, parameters) = build_search_predicate(&query.search);

    let total = connection
        .prepare(&format!(
            "SELECT COUNT(*) FROM product_transaction {where_clause}"
        ))?
        .query_row(params_from_iter(parameters.iter()), |row| {
            Ok(row.get::<_, i64>(0)? as usize)
        })?;

    let offset = query.page.saturating_sub(1) * query.per_page;
    let transactions = connection
        .prepare(&format!(
            "SELECT id, title, description, price, date_of_sale, category \
             FROM product_transaction {where_clause} LIMIT {} OFFSET {offset}",
            query.per_page
        ))?
        .query_map(params_from_iter(parameters.iter()), map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TransactionPage {
        transactions,
        total,
    })
}

/// Build the WHERE clause and its parameters for `search`.
///
/// An empty search term leaves the price-exists branch as the only live
/// condition, and every record has a price, so no clause is emitted at all. A
/// term that does not parse as a number keeps only the two substring branches.
fn build_search_predicate(search: &str) -> (String, Vec<Value>) {
    if search.is_empty() {
        return (String::new(), Vec::new());
    }

    let pattern = Value::Text(format!("%{search}%"));

    match search.parse::<f64>() {
        Ok(price) => (
            "WHERE title LIKE ?1 OR description LIKE ?1 OR price = ?2".to_string(),
            vec![pattern, Value::Real(price)],
        ),
        Err(_) => (
            "WHERE title LIKE ?1 OR description LIKE ?1".to_string(),
            vec![pattern],
        ),
    }
}
