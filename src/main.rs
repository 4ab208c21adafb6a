//! Tasklist server binary.
//!
//! # Usage
//!
//! ```bash
//! # In-memory storage on the default address 0.0.0.0:8080
//! tasklist
//!
//! # PostgreSQL storage on a custom address
//! tasklist --bind 127.0.0.1:9090 --database-url postgres://tasks@localhost/tasks
//! ```

use std::process::ExitCode;

use clap::Parser;
use tasklist::{
    config::{AppConfig, CliArgs},
    server, telemetry,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = CliArgs::parse();

    let config = match AppConfig::load(&cli) {
        Ok(config) => config,
        Err(err) => {
            telemetry::init_tracing("error");
            tracing::error!(error = %err, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    telemetry::init_tracing(&config.log_level);
    tracing::info!(addr = %config.bind_addr, "starting tasklist server");

    match server::run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "tasklist server failed");
            ExitCode::FAILURE
        }
    }
}
