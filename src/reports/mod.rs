//! Monthly reports over the transaction records.
//!
//! This module contains:
//! - Month-name resolution and the date range a report month covers
//! - The sales statistics, price histogram, and category breakdown queries
//! - Route handlers for the individual reports and the combined report

mod bar_chart;
mod combined;
mod month;
mod pie_chart;
mod statistics;

pub(crate) use bar_chart::bar_chart_endpoint;
pub(crate) use combined::combined_endpoint;
pub(crate) use pie_chart::pie_chart_endpoint;
pub(crate) use statistics::statistics_endpoint;
