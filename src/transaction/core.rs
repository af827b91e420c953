//! Defines the core data model and database queries for product transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::Error;

/// A single product sale held in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: i64,
    /// The name of the product that was sold.
    pub title: String,
    /// A text description of the product.
    pub description: String,
    /// The price the product was sold at.
    pub price: f64,
    /// When the product was sold.
    #[serde(with = "time::serde::rfc3339")]
    pub date_of_sale: OffsetDateTime,
    /// The product category, e.g. "electronics", "clothing".
    pub category: String,
}

/// A transaction record that has not been saved to the database yet.
///
/// Produced by the seed loader from the raw external records.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// The name of the product that was sold.
    pub title: String,
    /// A text description of the product.
    pub description: String,
    /// The price the product was sold at.
    pub price: f64,
    /// When the product was sold.
    pub date_of_sale: OffsetDateTime,
    /// The product category label.
    pub category: String,
}

/// Append `records` to the product transaction table.
///
/// Returns the number of records inserted. Records are inserted one at a time
/// with no enclosing SQL transaction: on failure, rows inserted before the
/// failing record remain in the store.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an unexpected SQL error.
pub(crate) fn insert_transactions(
    records: Vec<NewTransaction>,
    connection: &Connection,
) -> Result<usize, Error> {
    let mut statement = connection.prepare(
        "INSERT INTO product_transaction (title, description, price, date_of_sale, category)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;

    let mut inserted = 0;

    for record in &records {
        statement.execute((
            &record.title,
            &record.description,
            record.price,
            sale_date_text(record.date_of_sale),
            &record.category,
        ))?;

        inserted += 1;
    }

    Ok(inserted)
}

/// Format a sale date as the text stored in the database.
///
/// Sale dates are held as RFC 3339 text in UTC with whole-second precision,
/// so the stored strings sort lexicographically in date order and SQL range
/// comparisons work on the text column.
pub(crate) fn sale_date_text(date_of_sale: OffsetDateTime) -> String {
    date_of_sale.format(&Rfc3339).unwrap()
}

/// Convert a row into a [Transaction].
///
/// Expects the columns id, title, description, price, date_of_sale, category,
/// in that order.
pub(crate) fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let date_text: String = row.get(4)?;
    let date_of_sale = OffsetDateTime::parse(&date_text, &Rfc3339).map_err(|error| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(error))
    })?;

    Ok(Transaction {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        price: row.get(3)?,
        date_of_sale,
        category: row.get(5)?,
    })
}
