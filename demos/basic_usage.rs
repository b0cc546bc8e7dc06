//! Basic logger usage example
//!
//! Demonstrates the preset log types and how they are routed to stdout/stderr.
//!
//! Run with: cargo run --example basic_usage

use styled_logger::prelude::*;
use styled_logger::{info, warn};

fn main() -> Result<()> {
    println!("=== Styled Logger - Basic Usage Example ===\n");

    let logger = Logger::new();

    println!("1. Preset types:");
    logger.info("This is an info message")?;
    logger.success("This is a success message")?;
    logger.plain("This is a plain message")?;
    logger.warn("This is a warning (stderr)")?;
    logger.error("This is an error (stderr)")?;
    logger.debug("This is a debug message (stderr)")?;
    logger.failure("This is a failure (stderr)")?;

    println!("\n2. Macros with format arguments:");
    let port = 8080;
    info!(logger, "Server listening on port {}", port)?;
    warn!(logger, "Retry attempt {} of {}", 3, 5)?;

    println!("\n3. Labels, debug silenced:");
    let labelled = Logger::builder().labels(true).silence(Preset::Debug).build()?;
    labelled.info("Labelled info")?;
    labelled.debug("Not shown")?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
