//! Card components for the reports page.
//!
//! Provides:
//! - Stat cards for the headline figures
//! - Launch cards linking to the individual reports and their exports

use maud::{Markup, html};

use crate::{
    endpoints::{self, ExportFormat, export_url},
    html::{BUTTON_SECONDARY_STYLE, CARD_STYLE, LINK_STYLE, format_count, format_currency},
    reports::stats::ReportStats,
};

/// Renders one headline figure.
///
/// The figure itself carries the `stat-value` class so it can be picked
/// out of the card.
fn stat_card(id: &str, title: &str, value: &str, detail: Markup) -> Markup {
    html! {
        div id=(id) class=(CARD_STYLE)
        {
            h3 class="text-sm font-medium text-gray-500 dark:text-gray-400" { (title) }
            p class="stat-value mt-2 text-2xl font-bold text-gray-900 dark:text-white" { (value) }
            div class="mt-2 text-sm text-gray-600 dark:text-gray-400" { (detail) }
        }
    }
}

/// Renders the five stat cards.
pub(super) fn stat_cards_view(stats: &ReportStats) -> Markup {
    let collection_rate = stats.collection_rate();
    let bar_width = collection_rate.clamp(0.0, 100.0);

    html! {
        section class="grid grid-cols-1 sm:grid-cols-2 xl:grid-cols-5 gap-4 mb-8"
        {
            (stat_card(
                "total-revenue",
                "Total Revenue",
                &format_currency(stats.total_revenue),
                html! {
                    p { "This year. Collection rate: " span id="collection-rate" { (format!("{collection_rate:.1}%")) } }
                    div class="w-full h-2 mt-2 bg-gray-200 rounded-full dark:bg-gray-700"
                    {
                        div
                            class="h-2 bg-green-600 rounded-full"
                            style=(format!("width: {bar_width:.1}%"))
                        {}
                    }
                },
            ))

            (stat_card(
                "monthly-revenue",
                "Monthly Revenue",
                &format_currency(stats.monthly_revenue),
                html! { "This month" },
            ))

            (stat_card(
                "pending-payments",
                "Pending Payments",
                &format_currency(stats.pending_payments),
                html! { "Owed by businesses and properties" },
            ))

            (stat_card(
                "total-transactions",
                "Total Transactions",
                &format_count(stats.total_transactions),
                html! { "Payments this year" },
            ))

            (stat_card(
                "total-records",
                "Total Records",
                &format_count(stats.total_records()),
                html! {
                    span id="business-count" { (format_count(stats.total_businesses)) } " businesses, "
                    span id="property-count" { (format_count(stats.total_properties)) } " properties"
                },
            ))
        }
    }
}

/// A report that can be opened from the reports page.
struct ReportLink {
    title: &'static str,
    description: &'static str,
    endpoint: &'static str,
    exports: &'static [ExportFormat],
}

const BOTH_FORMATS: &[ExportFormat] = &[ExportFormat::Pdf, ExportFormat::Excel];

const REPORTS: [ReportLink; 6] = [
    ReportLink {
        title: "Revenue Report",
        description: "Revenue collected over a chosen period.",
        endpoint: endpoints::REVENUE_REPORT,
        exports: BOTH_FORMATS,
    },
    ReportLink {
        title: "Defaulters Report",
        description: "Businesses and properties with outstanding balances.",
        endpoint: endpoints::DEFAULTERS_REPORT,
        exports: BOTH_FORMATS,
    },
    ReportLink {
        title: "Payment Collection",
        description: "Payments received, grouped by collector and channel.",
        endpoint: endpoints::COLLECTION_REPORT,
        exports: BOTH_FORMATS,
    },
    ReportLink {
        title: "Business Register",
        description: "Every registered business and its balance.",
        endpoint: endpoints::BUSINESS_REPORT,
        exports: BOTH_FORMATS,
    },
    ReportLink {
        title: "Property Register",
        description: "Every registered property and its balance.",
        endpoint: endpoints::PROPERTY_REPORT,
        exports: BOTH_FORMATS,
    },
    ReportLink {
        title: "Bills Summary",
        description: "Bills issued per zone for the current year.",
        endpoint: endpoints::BILLS_SUMMARY_REPORT,
        exports: &[ExportFormat::Pdf],
    },
];

fn export_label(format: ExportFormat) -> &'static str {
    match format {
        ExportFormat::Pdf => "PDF",
        ExportFormat::Excel => "Excel",
    }
}

fn report_card(report: &ReportLink) -> Markup {
    html! {
        div class=(format!("report-card {CARD_STYLE} flex flex-col justify-between"))
        {
            div
            {
                h3 class="text-lg font-semibold text-gray-900 dark:text-white" { (report.title) }
                p class="mt-1 text-sm text-gray-600 dark:text-gray-400" { (report.description) }
            }

            div class="flex items-center gap-2 mt-4"
            {
                a href=(report.endpoint) class=(LINK_STYLE) { "View" }

                @for format in report.exports {
                    a href=(export_url(report.endpoint, *format)) class=(BUTTON_SECONDARY_STYLE)
                    {
                        (export_label(*format))
                    }
                }
            }
        }
    }
}

/// Renders the grid of report launch cards.
pub(super) fn report_cards_view() -> Markup {
    html! {
        section
        {
            h2 class="mb-4 text-xl font-semibold" { "Reports" }

            div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4"
            {
                @for report in &REPORTS {
                    (report_card(report))
                }
            }
        }
    }
}
