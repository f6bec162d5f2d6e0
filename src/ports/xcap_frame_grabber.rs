use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::ports::FrameGrabber;
use crate::core::models::{DisplayBounds, FrameBuffer};
use crate::global_constants::{ERROR_CONTEXT_CAPTURE_MONITOR, LOG_TAG_FRAME};

/// Grabs a full-screen raster through `xcap`.
///
/// `capture_image` returns the monitor at its physical resolution, so
/// nothing is ever downsampled before the crop.
pub struct XcapFrameGrabber;

impl XcapFrameGrabber {
    pub fn initialize() -> Self {
        log::debug!("{} initializing xcap frame grabber", LOG_TAG_FRAME);
        Self
    }

    fn find_monitor_for_display(&self, display: &DisplayBounds) -> Result<xcap::Monitor> {
        let monitors = xcap::Monitor::all()
            .with_context(|| "failed to enumerate screen sources")?;

        if monitors.is_empty() {
            anyhow::bail!("no screen sources found");
        }

        xcap::Monitor::from_point(display.x_origin, display.y_origin).with_context(|| {
            format!(
                "failed to find monitor at display origin ({}, {})",
                display.x_origin, display.y_origin
            )
        })
    }

    fn convert_image_to_frame_buffer(
        &self,
        image: xcap::image::RgbaImage,
        display: &DisplayBounds,
    ) -> FrameBuffer {
        let width_pixels = image.width();
        let height_pixels = image.height();
        let raw_rgba_data = image.into_raw();

        let (expected_width, expected_height) = display.physical_dimensions();
        if (width_pixels, height_pixels) != (expected_width, expected_height) {
            log::warn!(
                "{} frame is {}x{} but display reports {}x{} physical pixels",
                LOG_TAG_FRAME,
                width_pixels,
                height_pixels,
                expected_width,
                expected_height
            );
        }

        log::info!(
            "{} captured {}x{} frame, {} bytes",
            LOG_TAG_FRAME,
            width_pixels,
            height_pixels,
            raw_rgba_data.len()
        );

        FrameBuffer::build_from_raw_data(width_pixels, height_pixels, raw_rgba_data)
    }
}

#[async_trait]
impl FrameGrabber for XcapFrameGrabber {
    async fn grab_full_frame(&self, display: &DisplayBounds) -> Result<FrameBuffer> {
        let monitor = self.find_monitor_for_display(display)?;

        let captured_image = monitor
            .capture_image()
            .with_context(|| ERROR_CONTEXT_CAPTURE_MONITOR)?;

        Ok(self.convert_image_to_frame_buffer(captured_image, display))
    }
}
