//! The reports dashboard: headline figures for the billing system and links
//! to the individual reports.
//!
//! This module contains:
//! - `stats`: the aggregate queries and the collection rate
//! - `cards`: stat and report launch cards
//! - `handlers`: the page handler and view

mod cards;
mod handlers;
mod stats;

pub use handlers::get_reports_page;
