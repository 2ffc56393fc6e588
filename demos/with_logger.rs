//! Custom client configuration with an injected logging sink.
//!
//! Run with: `cargo run --example with_logger`

use drawthings::{Client, DrawThingsError, Logger, TextToImageRequest};
use std::fmt;
use std::time::Duration;

/// Logger that prefixes every diagnostic line.
struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, message: fmt::Arguments<'_>) {
        println!("[drawthings] {message}");
    }
}

#[tokio::main]
async fn main() -> drawthings::Result<()> {
    let client = Client::builder()
        .base_url("http://127.0.0.1:7860")
        .timeout(Duration::from_secs(600))
        .logger(ConsoleLogger)
        .build()?;

    let request = TextToImageRequest::new("a futuristic city at night").with_steps(30);
    client.generate_image_and_save(request, "city.png").await?;
    println!("Image saved to city.png");

    // Errors are classified, not string-matched.
    match client.generate_image(TextToImageRequest::new("")).await {
        Err(e @ DrawThingsError::Validation { .. }) => {
            println!("caught expected validation error: {e}")
        }
        other => println!("unexpected outcome: {other:?}"),
    }

    Ok(())
}
