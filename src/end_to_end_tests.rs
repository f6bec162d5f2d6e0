use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use base64::Engine;

use crate::core::interfaces::ports::{DisplayResolver, FrameGrabber};
use crate::core::models::{
    CaptureRegion, CaptureResult, DisplayBounds, FrameBuffer, ScreenPoint,
};
use crate::core::orchestrators::CapturePipeline;

struct FixedDisplayResolver {
    bounds: DisplayBounds,
}

impl DisplayResolver for FixedDisplayResolver {
    fn resolve_target_display(&self) -> Result<DisplayBounds> {
        Ok(self.bounds)
    }
}

struct SolidColorFrameGrabber {
    pixel: [u8; 4],
}

#[async_trait]
impl FrameGrabber for SolidColorFrameGrabber {
    async fn grab_full_frame(&self, display: &DisplayBounds) -> Result<FrameBuffer> {
        let (width, height) = display.physical_dimensions();
        let raw_data: Vec<u8> = self
            .pixel
            .iter()
            .copied()
            .cycle()
            .take((width * height * 4) as usize)
            .collect();
        Ok(FrameBuffer::build_from_raw_data(width, height, raw_data))
    }
}

fn build_pipeline(bounds: DisplayBounds, pixel: [u8; 4]) -> CapturePipeline {
    CapturePipeline::build(
        Arc::new(FixedDisplayResolver { bounds }),
        Arc::new(SolidColorFrameGrabber { pixel }),
    )
}

#[tokio::test]
async fn test_full_screen_capture_round_trips_the_mock_raster() {
    let bounds = DisplayBounds::build(0, 0, 1280, 800, 1.0);
    let pixel = [30u8, 144, 255, 255];
    let pipeline = build_pipeline(bounds, pixel);
    let full_screen = CaptureRegion::from_corner_points(
        ScreenPoint::at_coordinates(0, 0),
        ScreenPoint::at_coordinates(1280, 800),
    );

    let result = pipeline.run_capture(full_screen).await;

    let CaptureResult::Success { base64_image } = result else {
        panic!("full-screen capture must succeed");
    };

    let png_bytes = base64::engine::general_purpose::STANDARD
        .decode(&base64_image)
        .unwrap();
    let decoded = image::load_from_memory(&png_bytes).unwrap().into_rgba8();

    assert_eq!(decoded.width(), 1280);
    assert_eq!(decoded.height(), 800);

    let expected: Vec<u8> = pixel
        .iter()
        .copied()
        .cycle()
        .take(1280 * 800 * 4)
        .collect();
    assert_eq!(decoded.into_raw(), expected);
}

#[tokio::test]
async fn test_high_density_capture_crops_at_physical_resolution() {
    let bounds = DisplayBounds::build(0, 0, 1280, 800, 2.0);
    let pipeline = build_pipeline(bounds, [255, 0, 0, 255]);
    let selection = CaptureRegion::from_corner_points(
        ScreenPoint::at_coordinates(10, 10),
        ScreenPoint::at_coordinates(110, 60),
    );

    let result = pipeline.run_capture(selection).await;

    let CaptureResult::Success { base64_image } = result else {
        panic!("scaled capture must succeed");
    };

    let png_bytes = base64::engine::general_purpose::STANDARD
        .decode(&base64_image)
        .unwrap();
    let decoded = image::load_from_memory(&png_bytes).unwrap();

    // 100x50 logical selection at scale 2 is a 200x100 physical crop.
    assert_eq!(decoded.width(), 200);
    assert_eq!(decoded.height(), 100);
}

#[tokio::test]
async fn test_selection_reaching_display_edge_still_succeeds() {
    let bounds = DisplayBounds::build(0, 0, 1280, 800, 1.0);
    let pipeline = build_pipeline(bounds, [0, 255, 0, 255]);
    let edge_selection = CaptureRegion::from_corner_points(
        ScreenPoint::at_coordinates(1180, 700),
        ScreenPoint::at_coordinates(1280, 800),
    );

    let result = pipeline.run_capture(edge_selection).await;

    assert!(result.is_success());
}
