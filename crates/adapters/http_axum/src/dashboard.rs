//! The analytics dashboard page.
//!
//! One page, one state: the shell renders the same fixed KPI tiles on every
//! request and delegates the actual analytics to the embedded external
//! dashboard. The footer year is the only render-time value.

use askama::Template;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use chrono::{Datelike, Local};

use crate::error::PageError;
use crate::state::AppState;

/// A fixed visual tile showing a label and a numeric value.
///
/// The values are display literals, not measurements — nothing in this
/// service computes them (the live numbers live in the embedded dashboard).
pub struct KpiCard {
    /// Short label shown above the value.
    pub label: &'static str,
    /// Display value, pre-formatted (thousands separator included).
    pub value: &'static str,
    /// Font Awesome icon class.
    pub icon: &'static str,
    /// Tailwind color name used for the icon badge.
    pub accent: &'static str,
}

/// The four KPI tiles of the shell, in display order.
fn kpi_cards() -> Vec<KpiCard> {
    vec![
        KpiCard {
            label: "Total Active Alerts",
            value: "11",
            icon: "fa-triangle-exclamation",
            accent: "red",
        },
        KpiCard {
            label: "Critical Alerts",
            value: "3",
            icon: "fa-fire-flame-curved",
            accent: "orange",
        },
        KpiCard {
            label: "RFID Scans (24h)",
            value: "2,481",
            icon: "fa-barcode",
            accent: "blue",
        },
        KpiCard {
            label: "Products Tracked",
            value: "8",
            icon: "fa-boxes-stacked",
            accent: "purple",
        },
    ]
}

/// Analytics page template.
#[derive(Template)]
#[template(path = "analytics.html")]
pub struct AnalyticsTemplate {
    year: i32,
    embed_url: String,
    cards: Vec<KpiCard>,
}

impl IntoResponse for AnalyticsTemplate {
    fn into_response(self) -> Response {
        match self.render() {
            Ok(html) => axum::response::Html(html).into_response(),
            Err(err) => PageError::from(err).into_response(),
        }
    }
}

/// `GET /analytics` — the dashboard shell.
pub async fn analytics(State(state): State<AppState>) -> AnalyticsTemplate {
    AnalyticsTemplate {
        year: Local::now().year(),
        embed_url: state.dashboard.embed_url.clone(),
        cards: kpi_cards(),
    }
}
