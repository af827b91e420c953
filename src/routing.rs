//! Application router configuration.

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;

use crate::{
    AppState, endpoints,
    reports::{bar_chart_endpoint, combined_endpoint, pie_chart_endpoint, statistics_endpoint},
    seed::initialize_endpoint,
    transaction::list_transactions_endpoint,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_liveness))
        .route(endpoints::INITIALIZE, get(initialize_endpoint))
        .route(endpoints::TRANSACTIONS, get(list_transactions_endpoint))
        .route(endpoints::STATISTICS, get(statistics_endpoint))
        .route(endpoints::BAR_CHART, get(bar_chart_endpoint))
        .route(endpoints::PIE_CHART, get(pie_chart_endpoint))
        .route(endpoints::COMBINED, get(combined_endpoint))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Report that the service is up.
async fn get_liveness() -> &'static str {
    "Product transaction service is running"
}

#[cfg(test)]
mod routing_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;

    use crate::{AppState, build_router, endpoints};

    fn get_test_server() -> TestServer {
        let conn = Connection::open_in_memory().expect("Could not open database in memory.");
        let state = AppState::new(conn, "http://localhost/unused").unwrap();

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn root_reports_liveness() {
        let server = get_test_server();

        let response = server.get(endpoints::ROOT).await;

        response.assert_status_ok();
        response.assert_text("Product transaction service is running");
    }

    #[tokio::test]
    async fn transactions_route_is_reachable() {
        let server = get_test_server();

        let response = server.get(endpoints::TRANSACTIONS).await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!({"transactions": [], "total": 0}));
    }

    #[tokio::test]
    async fn month_routes_reject_unknown_months() {
        let server = get_test_server();

        for path in [
            "/statistics/febtober",
            "/bar-chart/febtober",
            "/pie-chart/febtober",
            "/combined/febtober",
        ] {
            let response = server.get(path).await;

            assert_eq!(
                response.status_code(),
                axum::http::StatusCode::BAD_REQUEST,
                "expected 400 for {path}"
            );
        }
    }
}
