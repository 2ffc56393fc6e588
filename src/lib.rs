#![warn(missing_docs)]
//! Client for the Draw Things image generation API.
//!
//! Draw Things exposes a Stable Diffusion WebUI-compatible HTTP API on
//! localhost. This crate turns a [`TextToImageRequest`] into a single POST
//! against that API and turns the response into decoded image data or a saved
//! file.
//!
//! # Quick Start
//!
//! ```no_run
//! use drawthings::{Client, TextToImageRequest};
//!
//! #[tokio::main]
//! async fn main() -> drawthings::Result<()> {
//!     let client = Client::new()?;
//!     let request = TextToImageRequest::new("a beautiful sunset over mountains")
//!         .with_steps(30)
//!         .with_size(768, 768);
//!     client.generate_image_and_save(request, "sunset.png").await?;
//!     Ok(())
//! }
//! ```
//!
//! # Error handling
//!
//! Every failure is classified into exactly one [`DrawThingsError`] variant:
//! validation (bad parameter, caught before any network call), network
//! (transport-level failure), API (non-success status from the server),
//! decode (usable response without usable image data), or I/O (local
//! filesystem failure while saving). Match on the variant or use the `is_*`
//! predicates; message text is never part of the contract.

mod client;
mod error;
mod http;
mod txt2img;
pub mod validate;

pub use client::{Client, ClientBuilder, Logger, StderrLogger, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{DrawThingsError, Result};
pub use txt2img::{
    TextToImageRequest, TextToImageResponse, DEFAULT_GUIDANCE_SCALE, DEFAULT_HEIGHT, DEFAULT_SEED,
    DEFAULT_STEPS, DEFAULT_WIDTH,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::client::{Client, ClientBuilder, Logger};
    pub use crate::error::{DrawThingsError, Result};
    pub use crate::txt2img::{TextToImageRequest, TextToImageResponse};
}
