//! Sets up the application's database schema.

use rusqlite::{Connection, Transaction as SqlTransaction};

use crate::Error;

/// Create the table for the application's domain model.
///
/// This function is idempotent and safe to call on an existing database.
///
/// # Errors
/// Returns an [Error::SqlError] if there is a SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    transaction.execute(
        "CREATE TABLE IF NOT EXISTS product_transaction (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                price REAL NOT NULL,
                date_of_sale TEXT NOT NULL,
                category TEXT NOT NULL
                )",
        (),
    )?;

    transaction.commit()?;

    Ok(())
}
