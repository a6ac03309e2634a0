//! Basic logger usage example
//!
//! Demonstrates development-mode console output for the built-in levels and
//! a custom level with a console timestamp.
//!
//! Run with: cargo run --example basic_usage

use level_logger_system::prelude::*;
use serde_json::json;

fn main() -> Result<()> {
    println!("=== Level Logger System - Basic Usage Example ===\n");

    let logger = Logger::new();
    logger.set_config(ConfigUpdate::new().with_development(true))?;

    println!("1. Built-in levels:");
    logger.info("This is an info message")?;
    logger.warn("This is a warning message")?;
    logger.error("This is an error message")?;
    logger.verbose("This is a verbose message")?;

    println!("\n2. Custom level with timestamp:");
    logger.add_log_level(
        "success",
        LevelPolicy::new(ConsoleStyle::GreenBright).with_timestamp_in_console(true),
    )?;
    logger.log("success", "Deployment finished")?;

    println!("\n3. Structured message:");
    logger.info(json!({ "port": 8080, "tls": true }))?;

    println!("\n4. Unknown level:");
    if let Err(e) = logger.log("trace", "not registered") {
        println!("   rejected: {}", e);
    }

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
