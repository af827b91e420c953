//! The combined monthly report.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::{AppState, Error};

use super::{
    bar_chart::{BucketCount, price_histogram},
    month::resolve_report_range,
    pie_chart::{CategoryCount, category_counts},
    statistics::{Statistics, monthly_statistics},
};

/// All three monthly reports for one report month.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CombinedReport {
    /// The monthly sales statistics.
    statistics: Statistics,
    /// The price histogram buckets.
    bar_chart: Vec<BucketCount>,
    /// The category breakdown.
    pie_chart: Vec<CategoryCount>,
}

/// Handle requests for all three monthly reports at once.
///
/// The three reports are computed independently for the same month; the
/// first failure aborts the whole response.
pub(crate) async fn combined_endpoint(
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> Result<Json<CombinedReport>, Error> {
    let range = resolve_report_range(&month)?;

    let connection = state.db_connection.lock().unwrap();
    let statistics = monthly_statistics(&range, &connection)?;
    let bar_chart = price_histogram(&range, &connection)?;
    let pie_chart = category_counts(&range, &connection)?;

    Ok(Json(CombinedReport {
        statistics,
        bar_chart,
        pie_chart,
    }))
}

#[cfg(test)]
mod combined_tests {
    use axum::{Router, http::StatusCode, routing::get};
    use axum_test::TestServer;
    use rusqlite::Connection;
    use time::{Date, Month, OffsetDateTime};

    use crate::{
        AppState, endpoints,
        reports::month::month_bounds,
        transaction::{NewTransaction, insert_transactions},
    };

    use super::{category_counts, combined_endpoint, monthly_statistics, price_histogram};

    fn get_test_state() -> AppState {
        let conn = Connection::open_in_memory().expect("Could not open database in memory.");
        AppState::new(conn, "http://localhost/unused").unwrap()
    }

    fn get_test_server(state: AppState) -> TestServer {
        let app = Router::new()
            .route(endpoints::COMBINED, get(combined_endpoint))
            .with_state(state);

        TestServer::try_new(app).expect("Could not create test server.")
    }

    fn current_year_march_sale(price: f64, category: &str, day: u8) -> NewTransaction {
        let year = OffsetDateTime::now_utc().year();

        NewTransaction {
            title: "Widget".to_string(),
            description: "A widget".to_string(),
            price,
            date_of_sale: Date::from_calendar_date(year, Month::March, day)
                .unwrap()
                .midnight()
                .assume_utc(),
            category: category.to_string(),
        }
    }

    #[tokio::test]
    async fn combined_matches_the_independent_reports() {
        let state = get_test_state();
        {
            let connection = state.db_connection.lock().unwrap();
            insert_transactions(
                vec![
                    current_year_march_sale(50.0, "electronics", 3),
                    current_year_march_sale(150.0, "clothing", 10),
                    current_year_march_sale(950.0, "electronics", 25),
                ],
                &connection,
            )
            .unwrap();
        }

        let want = {
            let connection = state.db_connection.lock().unwrap();
            let range = month_bounds(Month::March, OffsetDateTime::now_utc().year());

            serde_json::json!({
                "statistics": monthly_statistics(&range, &connection).unwrap(),
                "barChart": price_histogram(&range, &connection).unwrap(),
                "pieChart": category_counts(&range, &connection).unwrap(),
            })
        };

        let server = get_test_server(state);
        let response = server.get("/combined/march").await;

        response.assert_status_ok();
        response.assert_json(&want);
    }

    #[tokio::test]
    async fn endpoint_rejects_unknown_month() {
        let server = get_test_server(get_test_state());

        let response = server.get("/combined/quarter").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
