/// Snapshot of the display a capture attempt targets.
///
/// Queried fresh on every attempt - the pointer may have moved to a
/// different monitor since the last activation, so nothing here is cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayBounds {
    /// Origin of the display inside the virtual screen, logical units.
    pub x_origin: i32,
    pub y_origin: i32,
    /// Size in logical (non-scaled) units.
    pub logical_width: u32,
    pub logical_height: u32,
    /// Physical pixels per logical unit (2.0 on high-density displays).
    pub scale_factor: f64,
}

impl DisplayBounds {
    pub fn build(
        x_origin: i32,
        y_origin: i32,
        logical_width: u32,
        logical_height: u32,
        scale_factor: f64,
    ) -> Self {
        Self {
            x_origin,
            y_origin,
            logical_width,
            logical_height,
            scale_factor,
        }
    }

    /// Physical pixel dimensions the frame grabber should request.
    pub fn physical_dimensions(&self) -> (u32, u32) {
        let physical_width = (self.logical_width as f64 * self.scale_factor).round() as u32;
        let physical_height = (self.logical_height as f64 * self.scale_factor).round() as u32;
        (physical_width, physical_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physical_dimensions_scale_logical_size() {
        let bounds = DisplayBounds::build(0, 0, 1440, 900, 2.0);

        let (physical_width, physical_height) = bounds.physical_dimensions();

        assert_eq!(physical_width, 2880);
        assert_eq!(physical_height, 1800);
    }

    #[test]
    fn test_physical_dimensions_with_unit_scale_are_unchanged() {
        let bounds = DisplayBounds::build(0, 0, 1280, 800, 1.0);

        assert_eq!(bounds.physical_dimensions(), (1280, 800));
    }

    #[test]
    fn test_physical_dimensions_round_fractional_scale() {
        let bounds = DisplayBounds::build(0, 0, 1000, 500, 1.5);

        assert_eq!(bounds.physical_dimensions(), (1500, 750));
    }
}
