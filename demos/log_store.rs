//! Log store example
//!
//! Captures logger output in memory and queries it by level, time and context.
//!
//! Run with: cargo run --example log_store

use chrono::Utc;
use level_logger_system::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Level Logger System - Log Store Example ===\n");

    let store = Arc::new(LogStore::new());
    let logger = Logger::builder()
        .logs_dir("example-logs")
        .store(Arc::clone(&store))
        .build();

    let started = Utc::now();
    logger.info("service started")?;
    logger.error("database unreachable")?;

    store.add_log_with_context(
        "info",
        "request served",
        LogContext::new().with_field("user", "alice").with_field("status", 200),
    );
    store.add_log_with_context(
        "info",
        "request served",
        LogContext::new().with_field("user", "bob").with_field("status", 404),
    );

    println!("errors:");
    for record in store.query(&LogQuery::new().level("error")) {
        println!("  {} {}", record.timestamp, record.message);
    }

    println!("since start: {}", store.query(&LogQuery::new().since(started)).len());

    println!("alice:");
    for record in store.query(&LogQuery::new().context(LogContext::new().with_field("user", "alice"))) {
        println!("  {} {:?}", record.message, record.context);
    }

    Ok(())
}
