//! # thumbworx-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **server-side-rendered analytics dashboard** at
//!   `GET /analytics` — a complete HTML shell (header, KPI cards, footer)
//!   that embeds the externally-hosted Metabase dashboard via iframe
//! - Serve `GET /health` as a JSON liveness probe
//! - Map unknown paths to a rendered 404 page and template render failures
//!   to a plain 500
//!
//! ## Embedded dashboard approach
//! - The page is rendered server-side as complete HTML; the only dynamic
//!   value is the footer year, computed at render time.
//! - The actual analytics (queries, charts) live entirely in the embedded
//!   third-party dashboard. This adapter never calls it server-side; the
//!   browser fetches the iframe on its own.
//! - A plain link to the embed URL sits below the iframe so the dashboard
//!   stays reachable when the frame cannot load.

pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
