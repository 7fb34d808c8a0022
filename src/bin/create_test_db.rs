use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Duration, OffsetDateTime};

use billing_reports::{
    NewPayment, PasswordHash, PaymentStatus, UserRole, ValidatedPassword, create_business,
    create_payment, create_property, create_user, initialize_db,
};

/// A utility for creating a test database for the billing reports server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

const BUSINESSES: [(&str, f64); 5] = [
    ("Makola Traders", 350.0),
    ("Osu Bakery", 0.0),
    ("Kaneshie Motors", 1200.0),
    ("Labadi Beach Bar", 475.5),
    ("Adabraka Pharmacy", -20.0),
];

const PROPERTIES: [(&str, f64); 4] = [
    ("Kwame Mensah", 180.0),
    ("Efua Owusu", 0.0),
    ("Yaw Boateng", 90.0),
    ("Akosua Asante", 260.0),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test users...");

    for (username, role) in [("admin", UserRole::Admin), ("officer", UserRole::Officer)] {
        let password_hash = PasswordHash::new(
            ValidatedPassword::new_unchecked("test"),
            PasswordHash::DEFAULT_COST,
        )?;
        create_user(username, password_hash, role, &conn)?;
        println!("  {username} ({role}) with password \"test\"");
    }

    println!("Creating businesses and properties...");

    for (name, amount_payable) in BUSINESSES {
        create_business(name, amount_payable, &conn)?;
    }

    for (owner_name, amount_payable) in PROPERTIES {
        create_property(owner_name, amount_payable, &conn)?;
    }

    println!("Creating payments...");

    let today = OffsetDateTime::now_utc().date();
    let statuses = [
        PaymentStatus::Successful,
        PaymentStatus::Successful,
        PaymentStatus::Successful,
        PaymentStatus::Pending,
        PaymentStatus::Failed,
        PaymentStatus::Cancelled,
    ];

    for i in 0..60_i64 {
        let payment = NewPayment {
            amount_paid: 25.0 + (i % 7) as f64 * 12.5,
            status: statuses[i as usize % statuses.len()],
            date: today - Duration::days(i * 9),
        };
        create_payment(&payment, &conn)?;
    }

    println!("Success!");

    Ok(())
}
