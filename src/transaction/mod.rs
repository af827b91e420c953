//! Product transaction storage and listing.
//!
//! This module contains everything related to the transaction records
//! themselves:
//! - The `Transaction` model and the row mapping for the SQLite store
//! - Bulk insertion used by the seed loader
//! - The search/paging query and the listing endpoint

mod core;
mod list_endpoint;
mod query;

pub(crate) use self::core::{NewTransaction, insert_transactions, sale_date_text};
pub(crate) use list_endpoint::list_transactions_endpoint;
