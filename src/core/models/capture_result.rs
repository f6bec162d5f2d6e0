/// Outcome of one capture attempt, the only value that crosses back to the
/// user-facing layer. Either the base64-encoded PNG or a displayable error
/// string - no partial results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureResult {
    Success { base64_image: String },
    Failure { error: String },
}

impl CaptureResult {
    pub fn success(base64_image: String) -> Self {
        Self::Success { base64_image }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    #[allow(dead_code)]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Everything that can end a capture attempt early.
///
/// Converted to a plain message string at the `CaptureResult` boundary;
/// nothing downstream branches on the variant.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("A screenshot capture is already in progress")]
    CaptureInProgress,

    #[error("Invalid capture region: {0}")]
    InvalidRegion(String),

    #[error("No screen source found: {0}")]
    NoSourceFound(String),

    #[error("Screen capture produced an empty frame")]
    EmptyFrame,

    #[error(
        "Crop rectangle {}x{} at ({}, {}) lies outside the {}x{} frame",
        requested.2, requested.3, requested.0, requested.1,
        frame_size.0, frame_size.1
    )]
    CropOutOfBounds {
        requested: (u32, u32, u32, u32),
        frame_size: (u32, u32),
    },

    #[error("Failed to encode captured image: {0}")]
    EncodeFailure(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_carries_image_data() {
        let result = CaptureResult::success("aGVsbG8=".to_string());

        assert!(result.is_success());
        assert_eq!(
            result,
            CaptureResult::Success {
                base64_image: "aGVsbG8=".to_string()
            }
        );
    }

    #[test]
    fn test_failure_carries_displayable_message() {
        let result = CaptureResult::failure(CaptureError::EmptyFrame.to_string());

        assert!(!result.is_success());
        assert_eq!(
            result,
            CaptureResult::Failure {
                error: "Screen capture produced an empty frame".to_string()
            }
        );
    }

    #[test]
    fn test_capture_in_progress_message_is_user_readable() {
        let message = CaptureError::CaptureInProgress.to_string();

        assert_eq!(message, "A screenshot capture is already in progress");
    }
}
