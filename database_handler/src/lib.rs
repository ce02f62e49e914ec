#[macro_use]
extern crate diesel;
extern crate dotenv;
extern crate rand;

pub mod models;
pub mod schema;
pub mod validation;

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::result::OptionalExtension;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sqlite::SqliteConnection;
use dotenv::dotenv;
use log::{error, warn};
use std::env;
use thiserror::Error;

use crate::models::{NewUser, NewUserDetails, User};
use crate::validation::generate_account_number;

/// How many freshly generated account numbers to try before giving up
/// on an insert that keeps hitting the unique constraint.
const ACCOUNT_NUMBER_ATTEMPTS: u32 = 5;

const SCHEMA_DDL: &str = "
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    account_number TEXT UNIQUE NOT NULL,
    dob DATE NOT NULL,
    city TEXT NOT NULL,
    password TEXT NOT NULL,
    balance REAL NOT NULL CHECK(balance >= 2000),
    contact_number TEXT NOT NULL,
    email TEXT NOT NULL,
    address TEXT NOT NULL,
    is_active BOOLEAN NOT NULL DEFAULT 1
);
CREATE TABLE IF NOT EXISTS transactions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    account_number TEXT NOT NULL,
    transaction_type TEXT NOT NULL,
    amount REAL NOT NULL,
    date TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("account number already exists")]
    DuplicateAccount,
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("{0}")]
    Config(String),
    #[error("failed connecting to DB {0}")]
    Connection(String),
    #[error("database error: {0}")]
    Query(#[from] DieselError),
}

/// Connection parameters for the record store. Sourced from the
/// environment rather than hard-coded at each call site.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub database_url: String,
}

impl DbConfig {
    pub fn from_env() -> Result<DbConfig, StoreError> {
        dotenv().ok();
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| StoreError::Config(String::from("DATABASE_URL must be set")))?;
        Ok(DbConfig { database_url })
    }
}

/// Sole reader and writer of the `users` and `transactions` tables.
pub struct DbConnection {
    connection: SqliteConnection,
}

impl DbConnection {
    pub fn new_connection(config: &DbConfig) -> Result<DbConnection, StoreError> {
        let connection = SqliteConnection::establish(&config.database_url)
            .map_err(|_| StoreError::Connection(config.database_url.clone()))?;
        Ok(DbConnection { connection })
    }

    /// Creates both tables if they do not exist. Safe to run on every
    /// startup; existing rows are untouched.
    pub fn initialize_schema(&mut self) -> Result<(), StoreError> {
        self.connection.batch_execute(SCHEMA_DDL)?;
        Ok(())
    }

    /// Inserts a new user under a freshly generated account number and
    /// returns that number. A collision with an existing account number
    /// regenerates and retries a bounded number of times.
    pub fn create_user(&mut self, details: &NewUserDetails) -> Result<String, StoreError> {
        for attempt in 0..ACCOUNT_NUMBER_ATTEMPTS {
            let account_number = generate_account_number();
            match self.insert_user(&details.with_account_number(&account_number)) {
                Ok(()) => return Ok(account_number),
                Err(StoreError::DuplicateAccount) => {
                    warn!(
                        "Account number {} already taken (attempt {}), regenerating",
                        account_number,
                        attempt + 1
                    );
                }
                Err(e) => return Err(e),
            }
        }
        error!("Exhausted account number generation attempts");
        Err(StoreError::DuplicateAccount)
    }

    pub fn get_user(&mut self, account_number: &str) -> Result<Option<User>, StoreError> {
        Ok(schema::users::table
            .filter(schema::users::account_number.eq(account_number))
            .first(&self.connection)
            .optional()?)
    }

    pub fn list_users(&mut self) -> Result<Vec<User>, StoreError> {
        Ok(schema::users::table.load(&self.connection)?)
    }

    /// Exact match on account number and password. Returns None on any
    /// mismatch so callers cannot tell an unknown account from a wrong
    /// password.
    pub fn authenticate(
        &mut self,
        account_number: &str,
        password: &str,
    ) -> Result<Option<User>, StoreError> {
        Ok(schema::users::table
            .filter(schema::users::account_number.eq(account_number))
            .filter(schema::users::password.eq(password))
            .first(&self.connection)
            .optional()?)
    }

    fn insert_user(&mut self, row: &NewUser) -> Result<(), StoreError> {
        match diesel::insert_into(schema::users::table)
            .values(row)
            .execute(&self.connection)
        {
            Ok(_) => Ok(()),
            Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                Err(StoreError::DuplicateAccount)
            }
            Err(DieselError::DatabaseError(_, info)) => {
                Err(StoreError::ConstraintViolation(info.message().to_string()))
            }
            Err(e) => Err(StoreError::Query(e)),
        }
    }
}
