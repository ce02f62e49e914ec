extern crate strum;
extern crate strum_macros;

use std::str::FromStr;

use chrono::NaiveDate;
use log::{error, info};
use strum::EnumMessage;
use strum::IntoEnumIterator;
use strum_macros::AsRefStr;
use strum_macros::EnumIter;
use strum_macros::EnumMessage;
use strum_macros::EnumString;
use text_io::read;

use database_handler::models::{NewUserDetails, User};
use database_handler::validation::{validate_contact_number, validate_email, validate_password};
use database_handler::{DbConnection, StoreError};

#[derive(EnumIter, EnumString, EnumMessage, Debug, AsRefStr)]
enum Commands {
    #[strum(
        serialize = "1",
        message = "Add User",
        detailed_message = "Create a new customer account"
    )]
    AddUser,
    #[strum(
        serialize = "2",
        message = "Show Users",
        detailed_message = "List every account on record"
    )]
    ShowUsers,
    #[strum(
        serialize = "3",
        message = "Login",
        detailed_message = "Log in to a customer account"
    )]
    Login,
    #[strum(
        serialize = "4",
        message = "Exit",
        detailed_message = "This exits the program"
    )]
    Exit,
}

impl Commands {
    fn get_help_dialog() -> String {
        let mut out = String::new();
        out.push_str("\n--- Banking System ---\n");
        for command in Commands::iter() {
            out.push_str(
                format!(
                    "{}. {}\n",
                    command.get_serializations()[0],
                    command.get_message().unwrap_or(command.as_ref())
                )
                .as_ref(),
            );
        }
        out
    }
    fn get_user_command() -> Commands {
        print!("{}", Commands::get_help_dialog());
        println!("Enter your choice: ");
        let input: String = read!("{}\n");
        match Commands::from_str(input.trim()) {
            Ok(t) => t,
            Err(_) => {
                println!("Invalid choice. Try again.");
                Commands::get_user_command()
            }
        }
    }
}

#[derive(EnumIter, EnumString, EnumMessage, Debug, AsRefStr)]
enum SessionCommands {
    #[strum(serialize = "1", message = "Show Balance")]
    ShowBalance,
    #[strum(serialize = "2", message = "Show Transactions")]
    ShowTransactions,
    #[strum(serialize = "3", message = "Credit Amount")]
    Credit,
    #[strum(serialize = "4", message = "Debit Amount")]
    Debit,
    #[strum(serialize = "5", message = "Transfer Amount")]
    Transfer,
    #[strum(serialize = "6", message = "Activate/Deactivate Account")]
    ToggleActive,
    #[strum(serialize = "7", message = "Change Password")]
    ChangePassword,
    #[strum(serialize = "8", message = "Update Profile")]
    UpdateProfile,
    #[strum(serialize = "9", message = "Logout")]
    Logout,
}

impl SessionCommands {
    fn get_help_dialog() -> String {
        let mut out = String::new();
        out.push_str("\n--- User Menu ---\n");
        for command in SessionCommands::iter() {
            out.push_str(
                format!(
                    "{}. {}\n",
                    command.get_serializations()[0],
                    command.get_message().unwrap_or(command.as_ref())
                )
                .as_ref(),
            );
        }
        out
    }
    fn get_user_command() -> SessionCommands {
        print!("{}", SessionCommands::get_help_dialog());
        println!("Enter your choice: ");
        let input: String = read!("{}\n");
        match SessionCommands::from_str(input.trim()) {
            Ok(t) => t,
            Err(_) => {
                println!("Invalid choice. Try again.");
                SessionCommands::get_user_command()
            }
        }
    }
}

/// What a login attempt resolved to. Inactive accounts are reported
/// separately from bad credentials; unknown account and wrong password
/// are deliberately indistinguishable.
pub enum LoginOutcome {
    Success(User),
    Deactivated,
    InvalidCredentials,
}

pub fn classify_login(user: Option<User>) -> LoginOutcome {
    match user {
        Some(user) if user.is_active => LoginOutcome::Success(user),
        Some(_) => LoginOutcome::Deactivated,
        None => LoginOutcome::InvalidCredentials,
    }
}

pub struct InputLoop {
    database: DbConnection,
}

impl InputLoop {
    pub fn new(database: DbConnection) -> InputLoop {
        InputLoop { database }
    }

    ///The main user input loop
    /// Responds to user input
    pub fn start(&mut self) {
        info!("Started user input loop");
        loop {
            match Commands::get_user_command() {
                Commands::AddUser => self.create_user(),
                Commands::ShowUsers => self.show_users(),
                Commands::Login => self.login(),
                Commands::Exit => {
                    println!("Exiting... Goodbye!");
                    return;
                }
            }
        }
    }

    /// Prompts for every field of a new account. The first field that
    /// fails validation aborts the whole flow back to the main menu.
    fn create_user(&mut self) {
        println!("\n--- Add User ---");
        println!("Enter Name: ");
        let name: String = read!("{}\n");

        println!("Enter Date of Birth (YYYY-MM-DD): ");
        let dob_raw: String = read!("{}\n");
        let dob = match NaiveDate::parse_from_str(dob_raw.trim(), "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                println!("Invalid date of birth. Use YYYY-MM-DD.");
                return;
            }
        };

        println!("Enter City: ");
        let city: String = read!("{}\n");
        println!("Enter Address: ");
        let address: String = read!("{}\n");

        println!("Enter Contact Number (10 digits): ");
        let contact_number: String = read!("{}\n");
        if !validate_contact_number(contact_number.trim()) {
            println!("Invalid contact number. Must be 10 digits.");
            return;
        }

        println!("Enter Email ID: ");
        let email: String = read!("{}\n");
        if !validate_email(email.trim()) {
            println!("Invalid email format.");
            return;
        }

        let password = match rpassword::prompt_password_stdout(
            "Enter Password (at least 8 characters, including a digit and an uppercase letter): ",
        ) {
            Ok(password) => password,
            Err(e) => {
                error!("Failed to read password: {}", e);
                return;
            }
        };
        if !validate_password(&password) {
            println!("Invalid password.");
            return;
        }

        println!("Enter Initial Balance (minimum 2000): ");
        let balance_raw: String = read!("{}\n");
        let balance: f64 = match balance_raw.trim().parse() {
            Ok(amount) => amount,
            Err(_) => {
                println!("Invalid balance amount.");
                return;
            }
        };
        if balance < 2000.0 {
            println!("Initial balance must be at least 2000.");
            return;
        }

        let details = NewUserDetails {
            name: name.trim().to_string(),
            dob,
            city: city.trim().to_string(),
            address: address.trim().to_string(),
            contact_number: contact_number.trim().to_string(),
            email: email.trim().to_string(),
            password,
            balance,
        };
        match self.database.create_user(&details) {
            Ok(account_number) => {
                println!("User added successfully! Account Number: {}", account_number)
            }
            Err(StoreError::DuplicateAccount) | Err(StoreError::ConstraintViolation(_)) => {
                println!("Error: Account could not be created.")
            }
            Err(e) => {
                error!("Failed to create user: {}", e);
                println!("Error: Account could not be created.");
            }
        }
    }

    fn show_users(&mut self) {
        println!("\n--- User List ---");
        let users = match self.database.list_users() {
            Ok(users) => users,
            Err(e) => {
                error!("Failed to list users: {}", e);
                println!("Error: Could not read user list.");
                return;
            }
        };
        if users.is_empty() {
            println!("No users found.");
            return;
        }
        for user in users {
            let status = if user.is_active { "Active" } else { "Inactive" };
            println!(
                "Name: {}, Account Number: {}, DOB: {}, City: {}, Balance: {:.2}, Contact: {}, Email: {}, Address: {}, Status: {}",
                user.name,
                user.account_number,
                user.dob,
                user.city,
                user.balance,
                user.contact_number,
                user.email,
                user.address,
                status
            );
        }
    }

    fn login(&mut self) {
        println!("\n--- Login ---");
        println!("Enter Account Number: ");
        let account_number: String = read!("{}\n");
        let password = match rpassword::prompt_password_stdout("Enter Password: ") {
            Ok(password) => password,
            Err(e) => {
                error!("Failed to read password: {}", e);
                return;
            }
        };

        match self.database.authenticate(account_number.trim(), &password) {
            Ok(result) => match classify_login(result) {
                LoginOutcome::Success(user) => {
                    println!("Welcome, {}!", user.name);
                    self.user_menu(&user);
                }
                LoginOutcome::Deactivated => {
                    println!("Account is deactivated. Contact the bank.")
                }
                LoginOutcome::InvalidCredentials => {
                    println!("Invalid account number or password.")
                }
            },
            Err(e) => {
                error!("Login query failed: {}", e);
                println!("Error: Login is unavailable right now.");
            }
        }
    }

    /// Session menu for a logged-in user. Balance is the snapshot taken
    /// at login; only Show Balance and Logout do anything yet.
    fn user_menu(&mut self, user: &User) {
        loop {
            match SessionCommands::get_user_command() {
                SessionCommands::ShowBalance => {
                    println!("Your balance is: {:.2}", user.balance)
                }
                SessionCommands::Logout => {
                    println!("Logged out successfully.");
                    return;
                }
                _ => println!("Feature not implemented yet."),
            }
        }
    }
}

#[cfg(test)]
mod menu_test {
    use super::*;
    use chrono::NaiveDate;

    fn sample_user(is_active: bool) -> User {
        User {
            id: 1,
            name: String::from("Test User"),
            account_number: String::from("1234567890"),
            dob: NaiveDate::from_ymd(1990, 4, 12),
            city: String::from("Springfield"),
            password: String::from("Passw0rd"),
            balance: 5000.0,
            contact_number: String::from("0123456789"),
            email: String::from("test@example.com"),
            address: String::from("12 Evergreen Terrace"),
            is_active,
        }
    }

    #[test]
    fn main_menu_parses_numeric_choices() {
        assert!(matches!(Commands::from_str("1"), Ok(Commands::AddUser)));
        assert!(matches!(Commands::from_str("2"), Ok(Commands::ShowUsers)));
        assert!(matches!(Commands::from_str("3"), Ok(Commands::Login)));
        assert!(matches!(Commands::from_str("4"), Ok(Commands::Exit)));
        assert!(Commands::from_str("5").is_err());
        assert!(Commands::from_str("add").is_err());
    }

    #[test]
    fn session_menu_covers_choices_one_to_nine() {
        assert_eq!(SessionCommands::iter().count(), 9);
        assert!(matches!(
            SessionCommands::from_str("1"),
            Ok(SessionCommands::ShowBalance)
        ));
        assert!(matches!(
            SessionCommands::from_str("9"),
            Ok(SessionCommands::Logout)
        ));
        assert!(SessionCommands::from_str("0").is_err());
        assert!(SessionCommands::from_str("10").is_err());
    }

    #[test]
    fn login_classification() {
        assert!(matches!(
            classify_login(Some(sample_user(true))),
            LoginOutcome::Success(_)
        ));
        assert!(matches!(
            classify_login(Some(sample_user(false))),
            LoginOutcome::Deactivated
        ));
        assert!(matches!(
            classify_login(None),
            LoginOutcome::InvalidCredentials
        ));
    }
}
