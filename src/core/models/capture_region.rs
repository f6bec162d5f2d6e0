use crate::core::models::{CaptureError, DisplayBounds, ScreenPoint};
use crate::global_constants::LOG_TAG_REGION;

/// A selection rectangle in logical screen coordinates.
///
/// Built fresh for every capture attempt and never mutated afterwards;
/// translation produces a new instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureRegion {
    pub x_position: i32,
    pub y_position: i32,
    pub width: u32,
    pub height: u32,
}

impl CaptureRegion {
    /// Normalizes two arbitrary corner points into a non-negative rectangle.
    ///
    /// The corners may arrive in any order; the result is the axis-aligned
    /// bounding box of the two points. Identical points yield a zero-size
    /// region, which `validate_dimensions` rejects before any capture work.
    pub fn from_corner_points(first_corner: ScreenPoint, second_corner: ScreenPoint) -> Self {
        let x_position = first_corner.x_position.min(second_corner.x_position);
        let y_position = first_corner.y_position.min(second_corner.y_position);
        let width = (second_corner.x_position - first_corner.x_position).unsigned_abs();
        let height = (second_corner.y_position - first_corner.y_position).unsigned_abs();

        log::debug!(
            "{} normalized corners into {}x{} at ({}, {})",
            LOG_TAG_REGION,
            width,
            height,
            x_position,
            y_position
        );

        Self {
            x_position,
            y_position,
            width,
            height,
        }
    }

    /// The full area of a display, in display-local coordinates.
    #[allow(dead_code)]
    pub fn full_display(display: &DisplayBounds) -> Self {
        Self {
            x_position: 0,
            y_position: 0,
            width: display.logical_width,
            height: display.logical_height,
        }
    }

    /// Re-expresses a virtual-screen region in the coordinate space of the
    /// given display, whose origin becomes (0, 0).
    pub fn translated_into_display(&self, display: &DisplayBounds) -> Self {
        Self {
            x_position: self.x_position - display.x_origin,
            y_position: self.y_position - display.y_origin,
            width: self.width,
            height: self.height,
        }
    }

    /// Rejects degenerate selections. Runs before any platform call.
    pub fn validate_dimensions(&self) -> Result<(), CaptureError> {
        if self.width == 0 || self.height == 0 {
            return Err(CaptureError::InvalidRegion(format!(
                "selection has zero area ({}x{})",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Rejects regions that fall outside the target display.
    ///
    /// Expects display-local coordinates, see `translated_into_display`.
    pub fn validate_within_display(&self, display: &DisplayBounds) -> Result<(), CaptureError> {
        self.validate_dimensions()?;

        if self.x_position < 0 || self.y_position < 0 {
            return Err(CaptureError::InvalidRegion(format!(
                "selection origin ({}, {}) lies outside the target display",
                self.x_position, self.y_position
            )));
        }

        let right_edge = self.x_position as i64 + self.width as i64;
        let bottom_edge = self.y_position as i64 + self.height as i64;

        if right_edge > display.logical_width as i64 || bottom_edge > display.logical_height as i64
        {
            return Err(CaptureError::InvalidRegion(format!(
                "selection {}x{} at ({}, {}) exceeds display bounds {}x{}",
                self.width,
                self.height,
                self.x_position,
                self.y_position,
                display.logical_width,
                display.logical_height
            )));
        }

        Ok(())
    }
}
