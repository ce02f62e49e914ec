use std::fs::File;

use log::error;
use simplelog::{
    CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger,
};

use client::InputLoop;
use database_handler::{DbConfig, DbConnection};

fn main() {
    let mut config = ConfigBuilder::new();
    config.set_location_level(LevelFilter::Error);
    config.set_thread_level(LevelFilter::Error);
    config.set_time_level(LevelFilter::Error);
    CombinedLogger::init(vec![
        TermLogger::new(LevelFilter::Warn, config.build(), TerminalMode::Stdout),
        WriteLogger::new(
            LevelFilter::Info,
            config.build(),
            File::create("client.log").unwrap(),
        ),
    ])
    .unwrap();

    let config = match DbConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };
    let mut database = match DbConnection::new_connection(&config) {
        Ok(database) => database,
        Err(e) => {
            error!("Failed to open the database: {}", e);
            return;
        }
    };
    if let Err(e) = database.initialize_schema() {
        error!("Failed to initialize the schema: {}", e);
        return;
    }

    let mut input = InputLoop::new(database);
    input.start();
}
