//! Text-to-image generation.
//!
//! Request/response types for the `/sdapi/v1/txt2img` endpoint and the
//! generate pipeline: defaulting, validation, one HTTP round trip, and
//! classified error translation.

use crate::client::Client;
use crate::error::{DrawThingsError, Result};
use crate::validate::validate_request;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Endpoint path for text-to-image generation, joined onto the base URL.
const TXT2IMG_PATH: &str = "/sdapi/v1/txt2img";

/// Default number of inference steps.
pub const DEFAULT_STEPS: u32 = 20;
/// Default guidance scale.
pub const DEFAULT_GUIDANCE_SCALE: f64 = 4.0;
/// Default image width in pixels.
pub const DEFAULT_WIDTH: u32 = 512;
/// Default image height in pixels.
pub const DEFAULT_HEIGHT: u32 = 512;
/// Default seed. -1 requests a fresh random seed per call.
pub const DEFAULT_SEED: i64 = -1;

/// A request to generate an image from a text prompt.
///
/// Only `prompt` is required. Unset optional fields are filled with their
/// documented defaults by the pipeline before validation; an explicitly set
/// value is never altered, even when it equals a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextToImageRequest {
    /// Textual description of the desired image (required).
    pub prompt: String,

    /// Elements to exclude from the image. Omitted from the wire when empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub negative_prompt: String,

    /// Number of inference steps. Range 1-150, recommended 20-50, default 20.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,

    /// Adherence to the prompt. Range 1.0-20.0, recommended 4-7, default 4.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidance_scale: Option<f64>,

    /// Width of the generated image in pixels. Range 64-4096, default 512.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Height of the generated image in pixels. Range 64-4096, default 512.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Random seed. -1 requests a fresh random seed per call, default -1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
}

impl TextToImageRequest {
    /// Creates a new request with the given prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            negative_prompt: String::new(),
            steps: None,
            guidance_scale: None,
            width: None,
            height: None,
            seed: None,
        }
    }

    /// Sets the negative prompt.
    pub fn with_negative_prompt(mut self, negative_prompt: impl Into<String>) -> Self {
        self.negative_prompt = negative_prompt.into();
        self
    }

    /// Sets the number of inference steps.
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Sets the guidance scale.
    pub fn with_guidance_scale(mut self, scale: f64) -> Self {
        self.guidance_scale = Some(scale);
        self
    }

    /// Sets the desired dimensions in pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Sets the seed for reproducible generation.
    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fills unset optional fields with their documented defaults.
    ///
    /// Idempotent: a field that already holds a value is left untouched, so
    /// applying defaults twice yields the same request as applying them once.
    pub fn apply_defaults(&mut self) {
        if self.steps.is_none() {
            self.steps = Some(DEFAULT_STEPS);
        }
        if self.guidance_scale.is_none() {
            self.guidance_scale = Some(DEFAULT_GUIDANCE_SCALE);
        }
        if self.width.is_none() {
            self.width = Some(DEFAULT_WIDTH);
        }
        if self.height.is_none() {
            self.height = Some(DEFAULT_HEIGHT);
        }
        if self.seed.is_none() {
            self.seed = Some(DEFAULT_SEED);
        }
    }
}

/// Response from a text-to-image generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextToImageResponse {
    /// Base64-encoded image payloads, in generation order.
    pub images: Vec<String>,
}

impl Client {
    /// Generates one or more images from a text prompt.
    ///
    /// Applies defaults, validates parameters (failing fast with a
    /// [`DrawThingsError::Validation`] before any network call), then issues a
    /// single POST to the txt2img endpoint. A structurally valid response with
    /// zero images is a [`DrawThingsError::Decode`], not a success. No retries
    /// are made at any step.
    pub async fn generate_image(
        &self,
        mut request: TextToImageRequest,
    ) -> Result<TextToImageResponse> {
        request.apply_defaults();
        validate_request(&request)?;

        let url = format!("{}{}", self.base_url(), TXT2IMG_PATH);

        let response = self.http.post_json(&url, &request).await?;
        let decoded: TextToImageResponse = self.http.decode_json(response).await?;

        if decoded.images.is_empty() {
            return Err(DrawThingsError::decode("no images in response"));
        }

        Ok(decoded)
    }

    /// Generates an image and saves the first result to `output_path`.
    ///
    /// Parent directories are created as needed. A malformed base64 payload is
    /// a [`DrawThingsError::Decode`]; directory creation and file write
    /// failures are [`DrawThingsError::Io`]. No file is written unless
    /// generation succeeded, so a failed call never leaves a partial output
    /// behind. Additional images beyond the first are only accessible through
    /// [`Client::generate_image`].
    pub async fn generate_image_and_save(
        &self,
        request: TextToImageRequest,
        output_path: impl AsRef<Path>,
    ) -> Result<()> {
        let output_path = output_path.as_ref();
        let response = self.generate_image(request).await?;

        // generate_image guarantees at least one image.
        let image_data = base64::engine::general_purpose::STANDARD
            .decode(&response.images[0])
            .map_err(|e| {
                DrawThingsError::decode_with("failed to decode base64 image data", e)
            })?;

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(output_path, image_data)?;
        Ok(())
    }
}
