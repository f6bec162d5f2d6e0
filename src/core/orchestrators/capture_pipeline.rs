use std::sync::Arc;

use crate::core::interfaces::ports::{DisplayResolver, FrameGrabber};
use crate::core::models::{CaptureError, CaptureRegion, CaptureResult, DisplayBounds, FrameBuffer};
use crate::global_constants::LOG_TAG_PIPELINE;

/// The capture attempt state machine: claim the guard, resolve the target
/// display, validate the selection, grab a frame, crop, encode.
///
/// Every failure is converted to a `CaptureResult::Failure` at this
/// boundary; nothing propagates to the caller, and the guard is released on
/// every exit path.
pub struct CapturePipeline {
    display_resolver: Arc<dyn DisplayResolver>,
    frame_grabber: Arc<dyn FrameGrabber>,
    guard: super::CaptureGuard,
}

impl CapturePipeline {
    pub fn build(
        display_resolver: Arc<dyn DisplayResolver>,
        frame_grabber: Arc<dyn FrameGrabber>,
    ) -> Self {
        Self {
            display_resolver,
            frame_grabber,
            guard: super::CaptureGuard::new(),
        }
    }

    #[allow(dead_code)]
    pub fn is_capture_in_progress(&self) -> bool {
        self.guard.is_capture_in_progress()
    }

    /// Runs one capture attempt for a selection in virtual-screen
    /// coordinates and returns the sole boundary value the UI layer sees.
    pub async fn run_capture(&self, selection: CaptureRegion) -> CaptureResult {
        let started = std::time::Instant::now();

        match self.execute_capture_attempt(selection).await {
            Ok(base64_image) => {
                log::info!(
                    "{} capture finished in {}ms - {} base64 chars",
                    LOG_TAG_PIPELINE,
                    started.elapsed().as_millis(),
                    base64_image.len()
                );
                CaptureResult::success(base64_image)
            }
            Err(error) => {
                log::error!("{} capture failed: {}", LOG_TAG_PIPELINE, error);
                CaptureResult::failure(error.to_string())
            }
        }
    }

    async fn execute_capture_attempt(
        &self,
        selection: CaptureRegion,
    ) -> Result<String, CaptureError> {
        let _claim = self.guard.begin_capture()?;

        selection.validate_dimensions()?;

        let display = self.resolve_target_display()?;
        let local_selection = selection.translated_into_display(&display);
        local_selection.validate_within_display(&display)?;

        let frame = self.grab_full_frame(&display).await?;
        let cropped = frame.crop_scaled_region(&local_selection, display.scale_factor)?;

        cropped.encode_png_base64()
    }

    fn resolve_target_display(&self) -> Result<DisplayBounds, CaptureError> {
        let display = self
            .display_resolver
            .resolve_target_display()
            .map_err(|e| CaptureError::NoSourceFound(e.to_string()))?;

        log::debug!(
            "{} targeting display {}x{} at ({}, {}), scale {}",
            LOG_TAG_PIPELINE,
            display.logical_width,
            display.logical_height,
            display.x_origin,
            display.y_origin,
            display.scale_factor
        );

        Ok(display)
    }

    async fn grab_full_frame(&self, display: &DisplayBounds) -> Result<FrameBuffer, CaptureError> {
        let frame = self
            .frame_grabber
            .grab_full_frame(display)
            .await
            .map_err(|e| CaptureError::NoSourceFound(e.to_string()))?;

        if frame.is_empty() {
            return Err(CaptureError::EmptyFrame);
        }

        log::info!(
            "{} grabbed {}x{} frame",
            LOG_TAG_PIPELINE,
            frame.width,
            frame.height
        );

        Ok(frame)
    }
}
