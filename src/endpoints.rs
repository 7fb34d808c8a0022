//! The URIs served by this app and the ones the dashboard links to.
//!
//! Routes under "Other modules" are served by other parts of the billing
//! system. They are only linked to from the sidebar and the report cards.

/// The landing page, also where expired sessions are sent.
pub const HOME: &str = "/";
/// The reports dashboard for administrators.
pub const REPORTS_VIEW: &str = "/reports";
/// The route for getting the log in page.
pub const LOG_IN_VIEW: &str = "/log_in";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for logging in a user.
pub const LOG_IN_API: &str = "/api/log_in";
/// The route for the client to log out the current user.
pub const LOG_OUT: &str = "/api/log_out";

// Other modules
/// The main admin dashboard.
pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";
/// The business register.
pub const BUSINESSES: &str = "/admin/businesses";
/// The property register.
pub const PROPERTIES: &str = "/admin/properties";
/// Bill generation and listing.
pub const BILLING: &str = "/admin/billing";
/// Recorded payments.
pub const PAYMENTS: &str = "/admin/payments";
/// Staff accounts.
pub const USERS: &str = "/admin/users";
/// System settings.
pub const SETTINGS: &str = "/admin/settings";

/// Revenue collected over a period.
pub const REVENUE_REPORT: &str = "/reports/revenue";
/// Businesses and properties with outstanding balances.
pub const DEFAULTERS_REPORT: &str = "/reports/defaulters";
/// Payments grouped by collector and channel.
pub const COLLECTION_REPORT: &str = "/reports/collections";
/// Every registered business.
pub const BUSINESS_REPORT: &str = "/reports/businesses";
/// Every registered property.
pub const PROPERTY_REPORT: &str = "/reports/properties";
/// Bills issued per zone.
pub const BILLS_SUMMARY_REPORT: &str = "/reports/bills";

/// The query string flag that asks a report endpoint for a download.
pub const EXPORT_PARAM: &str = "export";

/// An export format understood by the report endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// A printable PDF.
    Pdf,
    /// An Excel workbook.
    Excel,
}

impl ExportFormat {
    /// The value of the [EXPORT_PARAM] query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Excel => "excel",
        }
    }
}

/// Append the export flag for `format` to a report endpoint.
pub fn export_url(report_endpoint: &str, format: ExportFormat) -> String {
    format!("{report_endpoint}?{EXPORT_PARAM}={}", format.as_str())
}
