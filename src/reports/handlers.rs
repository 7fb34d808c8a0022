//! Reports page HTTP handler and view rendering.

use std::sync::{Arc, Mutex};

use axum::{
    Extension,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;
use time::{Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    AppState, Error, endpoints,
    html::{HeadElement, base},
    navigation::{NavBar, Sidebar, sidebar_toggle_script},
    reports::{
        cards::{report_cards_view, stat_cards_view},
        stats::{ReportStats, load_report_stats},
    },
    session::CurrentUser,
    timezone::get_local_offset,
};

/// e.g. "Monday, 19 October 2026".
const DISPLAY_DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[weekday], [day padding:none] [month repr:long] [year]");

/// The state needed for displaying the reports page.
#[derive(Debug, Clone)]
pub struct ReportsState {
    /// The database connection for reading the billing tables.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "Africa/Accra".
    pub local_timezone: String,
}

impl FromRef<AppState> for ReportsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Display the reports page with this year's headline figures.
///
/// Must sit behind the admin access gate, which provides the [CurrentUser].
/// If the figures cannot be read, every figure is shown as zero.
///
/// # Errors
///
/// Returns [Error::InvalidTimezoneError] if the configured timezone is not known.
pub async fn get_reports_page(
    State(state): State<ReportsState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Response, Error> {
    let local_offset = get_local_offset(&state.local_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        Error::InvalidTimezoneError(state.local_timezone.clone())
    })?;
    let today = OffsetDateTime::now_utc().to_offset(local_offset).date();

    let stats = match state.db_connection.lock() {
        Ok(connection) => load_report_stats(&connection, today),
        Err(error) => {
            tracing::error!("could not acquire database lock, showing zeros instead: {error}");
            ReportStats::default()
        }
    };

    Ok(reports_view(&user, today, &stats).into_response())
}

/// Render the reports page. Has no side effects.
fn reports_view(user: &CurrentUser, today: Date, stats: &ReportStats) -> Markup {
    let date = today
        .format(DISPLAY_DATE_FORMAT)
        .unwrap_or_else(|_| today.to_string());
    let nav_bar = NavBar {
        username: &user.username,
        date: &date,
    };
    let sidebar = Sidebar::new(endpoints::REPORTS_VIEW);

    let content = html! {
        (nav_bar.into_html())

        div class="flex min-h-screen"
        {
            (sidebar.into_html())

            main class="flex-1 p-6 text-gray-900 dark:text-white"
            {
                h1 class="mb-6 text-2xl font-bold" { "Reports Dashboard" }

                (stat_cards_view(stats))
                (report_cards_view())
            }
        }
    };

    base(
        "Reports",
        &[HeadElement::ScriptSource(sidebar_toggle_script())],
        &content,
    )
}
