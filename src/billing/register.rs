//! The business and property registers.
//!
//! Each entry carries the amount currently owed. An entry with a positive
//! `amount_payable` is a defaulter.

use rusqlite::Connection;

use crate::Error;

/// The database ID of a registered business.
pub type BusinessId = i64;

/// The database ID of a registered property.
pub type PropertyId = i64;

/// Create the businesses table.
pub fn create_business_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS businesses (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            amount_payable REAL NOT NULL DEFAULT 0
        )",
        (),
    )?;

    Ok(())
}

/// Create the properties table.
pub fn create_property_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS properties (
            id INTEGER PRIMARY KEY,
            owner_name TEXT NOT NULL,
            amount_payable REAL NOT NULL DEFAULT 0
        )",
        (),
    )?;

    Ok(())
}

/// Register a business that owes `amount_payable`.
pub fn create_business(
    name: &str,
    amount_payable: f64,
    connection: &Connection,
) -> Result<BusinessId, Error> {
    connection.execute(
        "INSERT INTO businesses (name, amount_payable) VALUES (?1, ?2)",
        (name, amount_payable),
    )?;

    Ok(connection.last_insert_rowid())
}

/// Register a property whose owner owes `amount_payable`.
pub fn create_property(
    owner_name: &str,
    amount_payable: f64,
    connection: &Connection,
) -> Result<PropertyId, Error> {
    connection.execute(
        "INSERT INTO properties (owner_name, amount_payable) VALUES (?1, ?2)",
        (owner_name, amount_payable),
    )?;

    Ok(connection.last_insert_rowid())
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::{create_business, create_business_table, create_property, create_property_table};

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        create_business_table(&conn).unwrap();
        create_property_table(&conn).unwrap();
        conn
    }

    #[test]
    fn create_business_stores_amount() {
        let conn = get_test_connection();

        let id = create_business("Adum Chop Bar", 350.0, &conn).unwrap();

        let amount: f64 = conn
            .query_row(
                "SELECT amount_payable FROM businesses WHERE id = ?1",
                [id],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(amount, 350.0);
    }

    #[test]
    fn create_property_stores_owner() {
        let conn = get_test_connection();

        let id = create_property("Akosua Mensah", 0.0, &conn).unwrap();

        let owner: String = conn
            .query_row(
                "SELECT owner_name FROM properties WHERE id = ?1",
                [id],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(owner, "Akosua Mensah");
    }

    #[test]
    fn table_creation_is_idempotent() {
        let conn = get_test_connection();

        assert_eq!(Ok(()), create_business_table(&conn));
        assert_eq!(Ok(()), create_property_table(&conn));
    }
}
