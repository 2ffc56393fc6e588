//! Basic image generation example.
//!
//! Run with: `cargo run --example basic`
//!
//! Requires a Draw Things API server listening on the default local endpoint.

use drawthings::{Client, TextToImageRequest};

#[tokio::main]
async fn main() -> drawthings::Result<()> {
    let client = Client::new()?;

    let request = TextToImageRequest::new("a beautiful sunset over mountains, digital art")
        .with_negative_prompt("blurry, low quality")
        .with_steps(30)
        .with_size(768, 768)
        .with_seed(42);

    client
        .generate_image_and_save(request, "sunset.png")
        .await?;
    println!("Image saved to sunset.png");

    // The non-saving entry point exposes every returned image.
    let response = client
        .generate_image(TextToImageRequest::new("a cat wearing sunglasses"))
        .await?;
    println!(
        "Generated {} image(s), first payload is {} base64 characters",
        response.images.len(),
        response.images[0].len()
    );

    Ok(())
}
