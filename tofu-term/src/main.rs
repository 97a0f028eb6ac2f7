//! Tofu Console Demo Runner
//!
//! Runs the scripted console demo against an in-memory frame buffer and
//! prints the final frame.

mod app;
mod config;

use std::error::Error;

use app::App;
use clap::Parser;
use config::{CliArgs, Config};

fn main() -> Result<(), Box<dyn Error>> {
    // RUST_LOG=info or RUST_LOG=debug for more verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    log::debug!("starting tofu runner");

    let args = CliArgs::parse();

    let config = match Config::load_with_args(&args) {
        Ok(config) => config,
        Err(e) => {
            log::error!("configuration error: {}", e);
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    App::new(config).run();

    log::debug!("tofu runner exited");
    Ok(())
}
