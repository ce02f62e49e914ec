use super::schema::users;
extern crate chrono;

#[derive(Queryable, Clone, Debug)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub account_number: String,
    pub dob: chrono::naive::NaiveDate,
    pub city: String,
    pub password: String,
    pub balance: f64,
    pub contact_number: String,
    pub email: String,
    pub address: String,
    pub is_active: bool,
}

/// Row as inserted; `id` is assigned by the store and `is_active`
/// takes the column default (true).
#[derive(Insertable)]
#[table_name = "users"]
pub struct NewUser {
    pub name: String,
    pub account_number: String,
    pub dob: chrono::naive::NaiveDate,
    pub city: String,
    pub password: String,
    pub balance: f64,
    pub contact_number: String,
    pub email: String,
    pub address: String,
}

/// Everything the operator supplies when opening an account.
/// The account number itself is generated at insert time.
pub struct NewUserDetails {
    pub name: String,
    pub dob: chrono::naive::NaiveDate,
    pub city: String,
    pub address: String,
    pub contact_number: String,
    pub email: String,
    pub password: String,
    pub balance: f64,
}

impl NewUserDetails {
    pub fn with_account_number(&self, account_number: &str) -> NewUser {
        NewUser {
            name: self.name.clone(),
            account_number: account_number.to_string(),
            dob: self.dob,
            city: self.city.clone(),
            password: self.password.clone(),
            balance: self.balance,
            contact_number: self.contact_number.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
        }
    }
}

// No operation writes this table yet; credit/debit/transfer are stubs.
#[derive(Queryable)]
pub struct Transaction {
    pub id: i32,
    pub account_number: String,
    pub transaction_type: String,
    pub amount: f64,
    pub date: chrono::naive::NaiveDateTime,
}
