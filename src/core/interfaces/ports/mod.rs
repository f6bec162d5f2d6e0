mod display_resolver;
mod frame_grabber;
mod pointer_position_provider;

pub use display_resolver::DisplayResolver;
pub use frame_grabber::FrameGrabber;
pub use pointer_position_provider::PointerPositionProvider;
