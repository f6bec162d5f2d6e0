use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::{DisplayBounds, FrameBuffer};

/// Grabs a full raster snapshot of the target display at its physical pixel
/// resolution.
#[async_trait]
pub trait FrameGrabber: Send + Sync {
    async fn grab_full_frame(&self, display: &DisplayBounds) -> Result<FrameBuffer>;
}
