//! The API endpoint URIs.

/// The root route, which reports that the service is up.
pub const ROOT: &str = "/";
/// The route that seeds the transaction table from the external data source.
pub const INITIALIZE: &str = "/initialize";
/// The route for the paged, searchable transaction listing.
pub const TRANSACTIONS: &str = "/transactions";
/// The route for the monthly sales statistics report.
pub const STATISTICS: &str = "/statistics/{month}";
/// The route for the monthly price histogram report.
pub const BAR_CHART: &str = "/bar-chart/{month}";
/// The route for the monthly category breakdown report.
pub const PIE_CHART: &str = "/pie-chart/{month}";
/// The route that returns all three monthly reports at once.
pub const COMBINED: &str = "/combined/{month}";

// These tests are here so that we know the routes will parse as URIs.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::INITIALIZE);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS);
        assert_endpoint_is_valid_uri(endpoints::STATISTICS);
        assert_endpoint_is_valid_uri(endpoints::BAR_CHART);
        assert_endpoint_is_valid_uri(endpoints::PIE_CHART);
        assert_endpoint_is_valid_uri(endpoints::COMBINED);
    }
}
