mod analysis_mode;
mod capture_region;
mod capture_result;
mod display_bounds;
mod frame_buffer;
mod screen_point;

pub use analysis_mode::AnalysisMode;
pub use capture_region::CaptureRegion;
pub use capture_result::{CaptureError, CaptureResult};
pub use display_bounds::DisplayBounds;
pub use frame_buffer::{CropRect, FrameBuffer};
pub use screen_point::ScreenPoint;
