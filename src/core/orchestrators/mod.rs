mod app_orchestrator;
mod capture_guard;
mod capture_pipeline;

pub use app_orchestrator::AppOrchestrator;
pub use capture_guard::{CaptureClaim, CaptureGuard};
pub use capture_pipeline::CapturePipeline;
