//! Payments received against bills.

use std::fmt::Display;

use rusqlite::Connection;
use time::Date;

use crate::Error;

/// The database ID of a payment.
pub type PaymentId = i64;

/// The state of a payment as recorded by the collection system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    /// The money was received. Only these payments count as revenue.
    Successful,
    /// The payment was initiated but not confirmed.
    Pending,
    /// The payment provider rejected the payment.
    Failed,
    /// The payment was reversed or abandoned.
    Cancelled,
}

impl PaymentStatus {
    /// The string stored in the `payment_status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Successful => "Successful",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Failed => "Failed",
            PaymentStatus::Cancelled => "Cancelled",
        }
    }
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A payment to be inserted into the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    /// The amount received, in cedis.
    pub amount_paid: f64,
    /// Whether the payment went through.
    pub status: PaymentStatus,
    /// The day the payment was made.
    pub date: Date,
}

/// Create the payments table.
pub fn create_payment_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS payments (
            id INTEGER PRIMARY KEY,
            amount_paid REAL NOT NULL,
            payment_status TEXT NOT NULL,
            payment_date TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_payments_date ON payments(payment_date);",
    )?;

    Ok(())
}

/// Insert a payment and return its ID.
///
/// # Errors
///
/// Returns [Error::SqlError] if the insert fails.
pub fn create_payment(payment: &NewPayment, connection: &Connection) -> Result<PaymentId, Error> {
    connection.execute(
        "INSERT INTO payments (amount_paid, payment_status, payment_date) VALUES (?1, ?2, ?3)",
        (payment.amount_paid, payment.status.as_str(), payment.date),
    )?;

    Ok(connection.last_insert_rowid())
}
