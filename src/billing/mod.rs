//! The billing store read by the reports dashboard.
//!
//! Payments, businesses and properties are owned by other parts of the
//! billing system. This module only defines their tables and the inserts
//! needed to seed a database.

mod payment;
mod register;

pub use payment::{NewPayment, PaymentId, PaymentStatus, create_payment, create_payment_table};
pub use register::{
    BusinessId, PropertyId, create_business, create_business_table, create_property,
    create_property_table,
};
