//! Request parameter validation.

use crate::error::{DrawThingsError, Result};
use crate::txt2img::TextToImageRequest;

/// Inclusive bounds for the `steps` parameter.
pub const STEPS_RANGE: (u32, u32) = (1, 150);
/// Inclusive bounds for the `guidance_scale` parameter.
pub const GUIDANCE_SCALE_RANGE: (f64, f64) = (1.0, 20.0);
/// Inclusive bounds for the `width` and `height` parameters, in pixels.
pub const DIMENSION_RANGE: (u32, u32) = (64, 4096);

fn invalid(field: &str, message: String) -> DrawThingsError {
    DrawThingsError::Validation {
        field: field.to_string(),
        message,
    }
}

/// Checks request parameters against their documented domains.
///
/// Pure and deterministic: no I/O, no side effects. Checks run in a fixed
/// order and the first violation wins. Expects a request that has already
/// been defaulted; fields still unset are not checked.
pub fn validate_request(req: &TextToImageRequest) -> Result<()> {
    if req.prompt.is_empty() {
        return Err(invalid(
            "prompt",
            "prompt is required and cannot be empty".to_string(),
        ));
    }

    if let Some(steps) = req.steps {
        let (min, max) = STEPS_RANGE;
        if steps < min || steps > max {
            return Err(invalid(
                "steps",
                format!("steps must be between {min} and {max}, got {steps}"),
            ));
        }
    }

    if let Some(scale) = req.guidance_scale {
        let (min, max) = GUIDANCE_SCALE_RANGE;
        if scale < min || scale > max {
            return Err(invalid(
                "guidance_scale",
                format!("guidance_scale must be between {min:.1} and {max:.1}, got {scale:.2}"),
            ));
        }
    }

    if let Some(width) = req.width {
        let (min, max) = DIMENSION_RANGE;
        if width < min || width > max {
            return Err(invalid(
                "width",
                format!("width must be between {min} and {max} pixels, got {width}"),
            ));
        }
    }

    if let Some(height) = req.height {
        let (min, max) = DIMENSION_RANGE;
        if height < min || height > max {
            return Err(invalid(
                "height",
                format!("height must be between {min} and {max} pixels, got {height}"),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaulted(prompt: &str) -> TextToImageRequest {
        let mut req = TextToImageRequest::new(prompt);
        req.apply_defaults();
        req
    }

    fn field_of(err: DrawThingsError) -> String {
        match err {
            DrawThingsError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_defaulted_request() {
        assert!(validate_request(&defaulted("a sunset")).is_ok());
    }

    #[test]
    fn test_empty_prompt_rejected_regardless_of_other_fields() {
        let err = validate_request(&defaulted("")).unwrap_err();
        assert_eq!(field_of(err), "prompt");

        // Prompt is checked first, even when other fields are also invalid.
        let req = TextToImageRequest::new("").with_steps(999);
        let err = validate_request(&req).unwrap_err();
        assert_eq!(field_of(err), "prompt");
    }

    #[test]
    fn test_steps_out_of_range() {
        let err = validate_request(&defaulted("x").with_steps(0)).unwrap_err();
        assert_eq!(field_of(err), "steps");

        let err = validate_request(&defaulted("x").with_steps(151)).unwrap_err();
        assert_eq!(field_of(err), "steps");
    }

    #[test]
    fn test_guidance_scale_out_of_range() {
        let err = validate_request(&defaulted("x").with_guidance_scale(0.5)).unwrap_err();
        assert_eq!(field_of(err), "guidance_scale");

        let err = validate_request(&defaulted("x").with_guidance_scale(20.1)).unwrap_err();
        assert_eq!(field_of(err), "guidance_scale");
    }

    #[test]
    fn test_dimensions_out_of_range() {
        let err = validate_request(&defaulted("x").with_size(63, 512)).unwrap_err();
        assert_eq!(field_of(err), "width");

        let err = validate_request(&defaulted("x").with_size(512, 4097)).unwrap_err();
        assert_eq!(field_of(err), "height");
    }

    #[test]
    fn test_boundary_values_pass() {
        assert!(validate_request(&defaulted("x").with_steps(1)).is_ok());
        assert!(validate_request(&defaulted("x").with_steps(150)).is_ok());
        assert!(validate_request(&defaulted("x").with_guidance_scale(1.0)).is_ok());
        assert!(validate_request(&defaulted("x").with_guidance_scale(20.0)).is_ok());
        assert!(validate_request(&defaulted("x").with_size(64, 64)).is_ok());
        assert!(validate_request(&defaulted("x").with_size(4096, 4096)).is_ok());
    }

    #[test]
    fn test_validation_is_side_effect_free() {
        let req = defaulted("repeatable").with_steps(30);
        let before = req.clone();
        for _ in 0..3 {
            assert!(validate_request(&req).is_ok());
        }
        assert_eq!(req, before);
    }
}
