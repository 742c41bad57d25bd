pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod http;
pub mod normalize;
pub mod rate_limiter;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::services::{IngestionService, ProcessingService, StorageService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_fetch(username: &str) -> Result<()> {
    let config = AppConfig::from_env();
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut service = IngestionService::new(&config)?;
        service.run(username).await
    })
}

pub fn handle_process(username: &str) -> Result<()> {
    let config = AppConfig::from_env();
    let service = ProcessingService::new(&config)?;
    service.run(username).map(|_| ())
}

pub fn handle_store() -> Result<()> {
    let config = AppConfig::from_env();
    let service = StorageService::new(&config)?;
    service.run_sqlite(&config)
}

pub fn handle_run(username: &str) -> Result<()> {
    info!("Starting ETL for user '{}'", username);
    handle_fetch(username)?;
    handle_process(username)?;
    handle_store()?;
    info!("ETL process completed successfully");
    Ok(())
}
