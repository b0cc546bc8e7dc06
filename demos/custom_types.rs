//! Custom log type example
//!
//! Demonstrates registering custom types by name, by token, through a
//! factory and from JSON configuration.
//!
//! Run with: cargo run --example custom_types

use styled_logger::log;
use styled_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Styled Logger - Custom Types Example ===\n");

    let mut logger = Logger::new();

    println!("1. Named custom type:");
    logger.create_type("highlight", ["yellow", "bold"])?;
    logger.write("highlight", "Look here")?;
    log!(logger, "highlight", "{} unread messages", 3)?;

    println!("\n2. Token custom type (never collides with names):");
    let audit = TypeToken::with_description("audit");
    logger.create_type(&audit, ["black", "on_cyan"])?;
    logger.write(&audit, "user 42 logged in")?;

    println!("\n3. Factory-built type writing to stderr:");
    let styles = Style::parse_list(["bright_magenta", "underline"])?;
    logger.register_custom_type("alert", styles, |styles| {
        StyledType::new(styles).with_stream(Stream::Stderr)
    })?;
    logger.write("alert", "Certificate expires in 3 days")?;

    println!("\n4. Collisions are rejected:");
    if let Err(e) = logger.create_type("info", ["red"]) {
        println!("   {}", e);
    }

    println!("\n5. Types from configuration:");
    let config = LoggerConfig::from_json_str(
        r##"{
            "labels": true,
            "types": { "deploy": { "styles": ["#ff8800", "bold"] } }
        }"##,
    )?;
    let configured = Logger::from_config(config)?;
    configured.write("deploy", "Rolled out v1.2.0")?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
