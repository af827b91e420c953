//! Fetches and decodes the external seed data.

use serde::Deserialize;
use time::{OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339};

use crate::{Error, transaction::NewTransaction};

/// A raw transaction record as served by the external seed resource.
///
/// Only the fields that map onto the transaction model are read; the resource
/// also carries fields such as `image` and `sold`, which are ignored. The
/// resource does not guarantee any field is present, so everything except the
/// sale date falls back to an empty value.
#[derive(Debug, Deserialize)]
pub(crate) struct SeedRecord {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    price: f64,
    #[serde(rename = "dateOfSale")]
    date_of_sale: String,
    #[serde(default)]
    category: String,
}

impl SeedRecord {
    /// Map the raw record onto the transaction model.
    ///
    /// The sale date is normalized to UTC and truncated to whole seconds to
    /// match the store's text date format.
    ///
    /// # Errors
    /// Returns an [Error::SeedFetch] if `dateOfSale` is not an RFC 3339
    /// datetime.
    pub(crate) fn into_new_transaction(self) -> Result<NewTransaction, Error> {
        let date_of_sale = OffsetDateTime::parse(&self.date_of_sale, &Rfc3339)
            .map_err(|error| {
                Error::SeedFetch(format!(
                    "invalid dateOfSale {:?}: {error}",
                    self.date_of_sale
                ))
            })?
            .to_offset(UtcOffset::UTC)
            .replace_nanosecond(0)
            .unwrap();

        Ok(NewTransaction {
            title: self.title,
            description: self.description,
            price: self.price,
            date_of_sale,
            category: self.category,
        })
    }
}

/// Fetch the seed resource at `url` and map it onto transaction records.
///
/// # Errors
/// Returns an [Error::SeedFetch] if the request fails, the response status is
/// not a success, or the body is not a JSON array of seed records.
pub(crate) async fn fetch_seed_records(url: &str) -> Result<Vec<NewTransaction>, Error> {
    let response = reqwest::get(url)
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|error| Error::SeedFetch(error.to_string()))?;

    let records: Vec<SeedRecord> = response
        .json()
        .await
        .map_err(|error| Error::SeedFetch(error.to_string()))?;

    records
        .into_iter()
        .map(SeedRecord::into_new_transaction)
        .collect()
}
