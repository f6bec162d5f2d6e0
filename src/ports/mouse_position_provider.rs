use mouse_position::mouse_position::Mouse;

use crate::core::interfaces::ports::PointerPositionProvider;
use crate::core::models::ScreenPoint;
use crate::global_constants::{LOG_TAG_POINTER, MESSAGE_POINTER_POSITION_FAILED};

pub struct SystemPointerPositionProvider;

impl SystemPointerPositionProvider {
    pub fn initialize() -> Self {
        log::debug!("{} initializing pointer position provider", LOG_TAG_POINTER);
        Self
    }

    fn query_system_pointer_position(&self) -> Mouse {
        Mouse::get_mouse_position()
    }

    fn convert_mouse_result_to_point(&self, mouse_result: Mouse) -> Result<ScreenPoint, String> {
        match mouse_result {
            Mouse::Position { x, y } => {
                log::debug!("{} current position: ({}, {})", LOG_TAG_POINTER, x, y);
                Ok(ScreenPoint::at_coordinates(x, y))
            }
            Mouse::Error => {
                log::warn!("{} {}", LOG_TAG_POINTER, MESSAGE_POINTER_POSITION_FAILED);
                Err(MESSAGE_POINTER_POSITION_FAILED.to_string())
            }
        }
    }
}

impl PointerPositionProvider for SystemPointerPositionProvider {
    fn get_current_pointer_position(&self) -> Result<ScreenPoint, String> {
        let mouse_position_result = self.query_system_pointer_position();
        self.convert_mouse_result_to_point(mouse_position_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_mouse_result_with_valid_position_returns_point() {
        let provider = SystemPointerPositionProvider::initialize();
        let mouse_result = Mouse::Position { x: 100, y: 200 };

        let result = provider.convert_mouse_result_to_point(mouse_result);

        let point = result.unwrap();
        assert_eq!(point.x_position, 100);
        assert_eq!(point.y_position, 200);
    }

    #[test]
    fn test_convert_mouse_result_with_error_returns_message() {
        let provider = SystemPointerPositionProvider::initialize();

        let result = provider.convert_mouse_result_to_point(Mouse::Error);

        assert_eq!(result.unwrap_err(), MESSAGE_POINTER_POSITION_FAILED);
    }
}
