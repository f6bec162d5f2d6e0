use std::sync::Arc;

use anyhow::{Context, Result};

use crate::core::interfaces::ports::{DisplayResolver, PointerPositionProvider};
use crate::core::models::{DisplayBounds, ScreenPoint};
use crate::global_constants::{
    ERROR_CONTEXT_MONITOR_BOUNDS, ERROR_CONTEXT_SCALE_FACTOR, LOG_TAG_DISPLAY,
};

/// Resolves the monitor under the pointer through `xcap`.
pub struct XcapDisplayResolver {
    pointer_provider: Arc<dyn PointerPositionProvider>,
}

impl XcapDisplayResolver {
    pub fn initialize(pointer_provider: Arc<dyn PointerPositionProvider>) -> Self {
        log::debug!("{} initializing xcap display resolver", LOG_TAG_DISPLAY);
        Self { pointer_provider }
    }

    fn get_monitor_at_point(&self, point: &ScreenPoint) -> Result<xcap::Monitor> {
        xcap::Monitor::from_point(point.x_position, point.y_position).with_context(|| {
            format!(
                "failed to find monitor at ({}, {})",
                point.x_position, point.y_position
            )
        })
    }

    fn read_monitor_bounds(&self, monitor: &xcap::Monitor) -> Result<DisplayBounds> {
        let x_origin = monitor.x().with_context(|| ERROR_CONTEXT_MONITOR_BOUNDS)?;
        let y_origin = monitor.y().with_context(|| ERROR_CONTEXT_MONITOR_BOUNDS)?;
        let logical_width = monitor
            .width()
            .with_context(|| ERROR_CONTEXT_MONITOR_BOUNDS)?;
        let logical_height = monitor
            .height()
            .with_context(|| ERROR_CONTEXT_MONITOR_BOUNDS)?;
        let scale_factor = monitor
            .scale_factor()
            .with_context(|| ERROR_CONTEXT_SCALE_FACTOR)?;

        log::debug!(
            "{} monitor {}x{} at ({}, {}), scale_factor={}",
            LOG_TAG_DISPLAY,
            logical_width,
            logical_height,
            x_origin,
            y_origin,
            scale_factor
        );

        Ok(DisplayBounds::build(
            x_origin,
            y_origin,
            logical_width,
            logical_height,
            scale_factor as f64,
        ))
    }
}

impl DisplayResolver for XcapDisplayResolver {
    fn resolve_target_display(&self) -> Result<DisplayBounds> {
        let pointer = self
            .pointer_provider
            .get_current_pointer_position()
            .map_err(|e| anyhow::anyhow!(e))?;

        let monitor = self.get_monitor_at_point(&pointer)?;
        self.read_monitor_bounds(&monitor)
    }
}
