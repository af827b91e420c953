//! Seeds the transaction table from the external data source.

mod endpoint;
mod fetch;

pub(crate) use endpoint::initialize_endpoint;
