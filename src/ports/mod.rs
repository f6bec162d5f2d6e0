mod keyboard_listener;
mod mouse_position_provider;
mod xcap_display_resolver;
mod xcap_frame_grabber;

pub use keyboard_listener::{GlobalKeyboardEvent, GlobalKeyboardListener};
pub use mouse_position_provider::SystemPointerPositionProvider;
pub use xcap_display_resolver::XcapDisplayResolver;
pub use xcap_frame_grabber::XcapFrameGrabber;
