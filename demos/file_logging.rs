//! File logging example
//!
//! Demonstrates rotated log files and per-call overrides.
//!
//! Run with: cargo run --example file_logging

use level_logger_system::prelude::*;

fn main() -> Result<()> {
    println!("=== Level Logger System - File Logging Example ===\n");

    let logger = Logger::new();
    logger.set_config(
        ConfigUpdate::new()
            .with_logs_dir("example-logs")
            .with_rotation(Rotation::Monthly)
            .with_development(true),
    )?;

    logger.add_log_level(
        "audit",
        LevelPolicy::new(ConsoleStyle::Cyan)
            .with_log_to_file(true)
            .with_log_file_name("audit.log"),
    )?;

    for i in 1..=5 {
        logger.info(format!("Processing item {}/5", i))?;
        if i == 3 {
            logger.warn("Item 3 took longer than expected")?;
        }
    }

    logger.log("audit", "user 42 changed their password")?;
    logger.info_with_options(
        "console only, not written to disk",
        &LogOptions::new().log_to_file(false),
    )?;

    logger.flush()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'example-logs/<year>/<month>/' for the log files");

    Ok(())
}
