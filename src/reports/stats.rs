//! The aggregate figures shown at the top of the reports page.

use rusqlite::Connection;
use time::Date;

use crate::{Error, billing::PaymentStatus};

/// Headline figures for the billing system, computed once per request.
///
/// Currency amounts are in cedis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportStats {
    /// Successful payments dated in the current calendar year.
    pub total_revenue: f64,
    /// Successful payments dated in the current calendar month.
    pub monthly_revenue: f64,
    /// Outstanding amounts owed by businesses and properties.
    pub pending_payments: f64,
    /// Payments of any status dated in the current calendar year.
    pub total_transactions: i64,
    /// Number of registered businesses.
    pub total_businesses: i64,
    /// Number of registered properties.
    pub total_properties: i64,
}

impl ReportStats {
    /// The share of money owed this year that has been collected, as a
    /// percentage rounded to one decimal place.
    ///
    /// Returns 0 when nothing has been collected or is owed.
    pub fn collection_rate(&self) -> f64 {
        let total_owed = self.total_revenue + self.pending_payments;

        if total_owed <= 0.0 {
            return 0.0;
        }

        (self.total_revenue / total_owed * 1000.0).round() / 10.0
    }

    /// Businesses and properties combined.
    pub fn total_records(&self) -> i64 {
        self.total_businesses + self.total_properties
    }
}

/// The first day of the year containing `today` and the first day of the next year.
fn year_bounds(today: Date) -> (String, String) {
    let year = today.year();

    (format!("{year:04}-01-01"), format!("{:04}-01-01", year + 1))
}

/// The first day of the month containing `today` and the first day of the next month.
fn month_bounds(today: Date) -> (String, String) {
    let year = today.year();
    let month = u8::from(today.month());
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    (
        format!("{year:04}-{month:02}-01"),
        format!("{next_year:04}-{next_month:02}-01"),
    )
}

/// Run the five aggregate queries for the year and month containing `today`.
///
/// # Errors
///
/// Returns an [Error::SqlError] if any of the queries fail.
pub fn query_report_stats(connection: &Connection, today: Date) -> Result<ReportStats, Error> {
    let (year_start, next_year_start) = year_bounds(today);
    let (month_start, next_month_start) = month_bounds(today);
    let successful = PaymentStatus::Successful.as_str();

    let total_revenue: f64 = connection.query_row(
        "SELECT COALESCE(SUM(amount_paid), 0.0) FROM payments
        WHERE payment_status = ?1 AND payment_date >= ?2 AND payment_date < ?3",
        (successful, &year_start, &next_year_start),
        |row| row.get(0),
    )?;

    let monthly_revenue: f64 = connection.query_row(
        "SELECT COALESCE(SUM(amount_paid), 0.0) FROM payments
        WHERE payment_status = ?1 AND payment_date >= ?2 AND payment_date < ?3",
        (successful, &month_start, &next_month_start),
        |row| row.get(0),
    )?;

    let pending_payments: f64 = connection.query_row(
        "SELECT
            (SELECT COALESCE(SUM(amount_payable), 0.0) FROM businesses WHERE amount_payable > 0)
            + (SELECT COALESCE(SUM(amount_payable), 0.0) FROM properties WHERE amount_payable > 0)",
        (),
        |row| row.get(0),
    )?;

    let total_transactions: i64 = connection.query_row(
        "SELECT COUNT(*) FROM payments WHERE payment_date >= ?1 AND payment_date < ?2",
        (&year_start, &next_year_start),
        |row| row.get(0),
    )?;

    let (total_businesses, total_properties): (i64, i64) = connection.query_row(
        "SELECT (SELECT COUNT(*) FROM businesses), (SELECT COUNT(*) FROM properties)",
        (),
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    Ok(ReportStats {
        total_revenue,
        monthly_revenue,
        pending_payments,
        total_transactions,
        total_businesses,
        total_properties,
    })
}

/// Like [query_report_stats], but any failure zeroes every figure so the
/// page can still be shown.
pub fn load_report_stats(connection: &Connection, today: Date) -> ReportStats {
    query_report_stats(connection, today).unwrap_or_else(|error| {
        tracing::error!("Could not load report statistics, showing zeros instead: {error}");
        ReportStats::default()
    })
}

#[cfg(test)]
mod period_tests {
    use time::macros::date;

    use super::{month_bounds, year_bounds};

    #[test]
    fn year_runs_from_new_year_to_new_year() {
        assert_eq!(
            year_bounds(date!(2026 - 10 - 19)),
            ("2026-01-01".to_owned(), "2027-01-01".to_owned())
        );
    }

    #[test]
    fn month_runs_to_first_of_next_month() {
        assert_eq!(
            month_bounds(date!(2026 - 02 - 28)),
            ("2026-02-01".to_owned(), "2026-03-01".to_owned())
        );
    }

    #[test]
    fn december_rolls_over_to_next_year() {
        assert_eq!(
            month_bounds(date!(2026 - 12 - 31)),
            ("2026-12-01".to_owned(), "2027-01-01".to_owned())
        );
    }
}


#[cfg(test)]
mod query_tests {
    use rusqlite::Connection;
    use time::{Date, macros::date};

    use crate::{
        billing::{NewPayment, PaymentStatus, create_business, create_payment, create_property},
        db::initialize,
    };

    use super::{ReportStats, load_report_stats, query_report_stats};

    const TODAY: Date = date!(2026 - 10 - 19);

    fn get_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        connection
    }

    fn pay(amount_paid: f64, status: PaymentStatus, date: Date, connection: &Connection) {
        create_payment(
            &NewPayment {
                amount_paid,
                status,
                date,
            },
            connection,
        )
        .unwrap();
    }

    fn populate(connection: &Connection) {
        pay(100.0, PaymentStatus::Successful, date!(2026 - 10 - 01), connection);
        pay(250.5, PaymentStatus::Successful, date!(2026 - 10 - 19), connection);
        pay(400.0, PaymentStatus::Successful, date!(2026 - 03 - 15), connection);
        pay(75.0, PaymentStatus::Pending, date!(2026 - 10 - 05), connection);
        pay(60.0, PaymentStatus::Failed, date!(2026 - 01 - 02), connection);
        pay(999.0, PaymentStatus::Successful, date!(2025 - 12 - 31), connection);
        pay(999.0, PaymentStatus::Successful, date!(2027 - 01 - 01), connection);

        create_business("Makola Traders", 300.0, connection).unwrap();
        create_business("Osu Bakery", 0.0, connection).unwrap();
        create_business("Overpaid Ltd", -50.0, connection).unwrap();
        create_property("Kwame Mensah", 120.0, connection).unwrap();
        create_property("Efua Owusu", 80.0, connection).unwrap();
    }

    #[test]
    fn empty_database_is_all_zero() {
        let connection = get_connection();

        let stats = query_report_stats(&connection, TODAY).unwrap();

        assert_eq!(stats, ReportStats::default());
    }

    #[test]
    fn revenue_only_counts_successful_payments_this_year() {
        let connection = get_connection();
        populate(&connection);

        let stats = query_report_stats(&connection, TODAY).unwrap();

        assert_eq!(stats.total_revenue, 750.5);
    }

    #[test]
    fn monthly_revenue_only_counts_this_month() {
        let connection = get_connection();
        populate(&connection);

        let stats = query_report_stats(&connection, TODAY).unwrap();

        assert_eq!(stats.monthly_revenue, 350.5);
    }

    #[test]
    fn pending_sums_positive_balances_of_both_registers() {
        let connection = get_connection();
        populate(&connection);

        let stats = query_report_stats(&connection, TODAY).unwrap();

        assert_eq!(stats.pending_payments, 500.0);
    }

    #[test]
    fn transactions_count_every_status_this_year() {
        let connection = get_connection();
        populate(&connection);

        let stats = query_report_stats(&connection, TODAY).unwrap();

        assert_eq!(stats.total_transactions, 5);
    }

    #[test]
    fn counts_registered_businesses_and_properties() {
        let connection = get_connection();
        for i in 0..12 {
            create_business(&format!("Business {i}"), 10.0, &connection).unwrap();
        }
        for i in 0..8 {
            create_property(&format!("Owner {i}"), 10.0, &connection).unwrap();
        }

        let stats = query_report_stats(&connection, TODAY).unwrap();

        assert_eq!(stats.total_businesses, 12);
        assert_eq!(stats.total_properties, 8);
        assert_eq!(stats.total_records(), 20);
    }

    #[test]
    fn any_failing_query_zeroes_every_figure() {
        for breakage in [
            "DROP TABLE payments",
            "ALTER TABLE payments DROP COLUMN payment_status",
            "ALTER TABLE payments RENAME COLUMN amount_paid TO amount",
            "DROP TABLE businesses",
            "ALTER TABLE businesses RENAME COLUMN amount_payable TO balance",
            "DROP TABLE properties",
            "ALTER TABLE properties RENAME COLUMN amount_payable TO balance",
        ] {
            let connection = get_connection();
            populate(&connection);
            assert_ne!(
                query_report_stats(&connection, TODAY).unwrap(),
                ReportStats::default()
            );
            connection.execute(breakage, ()).unwrap();

            let stats = load_report_stats(&connection, TODAY);

            assert!(query_report_stats(&connection, TODAY).is_err(), "{breakage}");
            assert_eq!(stats, ReportStats::default(), "after {breakage}");
            assert_eq!(stats.collection_rate(), 0.0, "after {breakage}");
            assert_eq!(stats.total_records(), 0, "after {breakage}");
        }
    }

    #[test]
    fn load_passes_through_good_results() {
        let connection = get_connection();
        populate(&connection);

        let stats = load_report_stats(&connection, TODAY);

        assert_eq!(stats, query_report_stats(&connection, TODAY).unwrap());
        assert_ne!(stats, ReportStats::default());
    }
}
