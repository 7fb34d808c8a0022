//! Creates the application's tables.

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{
    Error,
    billing::{create_business_table, create_payment_table, create_property_table},
    user::create_user_table,
};

/// Create all the tables the application reads from, if they do not exist.
///
/// The tables are created inside a single exclusive transaction.
///
/// # Errors
///
/// Returns [Error::SqlError] if any table could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_user_table(&transaction)?;
    create_business_table(&transaction)?;
    create_property_table(&transaction)?;
    create_payment_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
