use rdev::{listen, EventType, Key};
use tokio::sync::mpsc;

use crate::global_constants::{
    LOG_TAG_KEYBOARD, MESSAGE_KEYBOARD_ALT_PRESSED, MESSAGE_KEYBOARD_ALT_RELEASED,
    MESSAGE_KEYBOARD_ESCAPE_PRESSED, MESSAGE_KEYBOARD_HOTKEY_DETECTED,
    MESSAGE_KEYBOARD_SHIFT_PRESSED, MESSAGE_KEYBOARD_SHIFT_RELEASED,
};

#[derive(Debug, Clone)]
pub enum GlobalKeyboardEvent {
    CaptureHotkeyPressed,
    EscapePressed,
}

pub struct GlobalKeyboardListener;

impl GlobalKeyboardListener {
    /// Starts the OS keyboard hook on its own thread and returns the
    /// channel the recognized events arrive on.
    pub fn start_event_stream() -> mpsc::UnboundedReceiver<GlobalKeyboardEvent> {
        let (event_sender, event_receiver) = mpsc::unbounded_channel();

        Self::spawn_keyboard_listener_thread(event_sender);

        event_receiver
    }

    fn spawn_keyboard_listener_thread(event_sender: mpsc::UnboundedSender<GlobalKeyboardEvent>) {
        std::thread::spawn(move || {
            log::info!(
                "{} Starting global keyboard listener thread",
                LOG_TAG_KEYBOARD
            );

            let mut state = KeyboardState::default();

            if let Err(e) = listen(move |event| {
                if let Some(global_event) = state.process_event(event) {
                    let _ = event_sender.send(global_event);
                }
            }) {
                log::error!("{} Failed to start keyboard listener: {:?}. This is expected if another instance is already running.", LOG_TAG_KEYBOARD, e);
            }
        });
    }
}

#[derive(Default)]
struct KeyboardState {
    is_alt_pressed: bool,
    is_shift_pressed: bool,
}

impl KeyboardState {
    fn process_event(&mut self, event: rdev::Event) -> Option<GlobalKeyboardEvent> {
        match event.event_type {
            EventType::KeyPress(key) => self.handle_key_press(key),
            EventType::KeyRelease(key) => self.handle_key_release(key),
            _ => None,
        }
    }

    fn handle_key_press(&mut self, key: Key) -> Option<GlobalKeyboardEvent> {
        match key {
            Key::Alt => {
                log::debug!("{} {}", LOG_TAG_KEYBOARD, MESSAGE_KEYBOARD_ALT_PRESSED);
                self.is_alt_pressed = true;
                None
            }
            Key::ShiftLeft | Key::ShiftRight => {
                log::debug!("{} {}", LOG_TAG_KEYBOARD, MESSAGE_KEYBOARD_SHIFT_PRESSED);
                self.is_shift_pressed = true;
                None
            }
            Key::KeyS if self.is_alt_pressed && self.is_shift_pressed => {
                log::info!("{} {}", LOG_TAG_KEYBOARD, MESSAGE_KEYBOARD_HOTKEY_DETECTED);
                Some(GlobalKeyboardEvent::CaptureHotkeyPressed)
            }
            Key::Escape => {
                log::debug!("{} {}", LOG_TAG_KEYBOARD, MESSAGE_KEYBOARD_ESCAPE_PRESSED);
                Some(GlobalKeyboardEvent::EscapePressed)
            }
            _ => None,
        }
    }

    fn handle_key_release(&mut self, key: Key) -> Option<GlobalKeyboardEvent> {
        match key {
            Key::Alt => {
                log::debug!("{} {}", LOG_TAG_KEYBOARD, MESSAGE_KEYBOARD_ALT_RELEASED);
                self.is_alt_pressed = false;
            }
            Key::ShiftLeft | Key::ShiftRight => {
                log::debug!("{} {}", LOG_TAG_KEYBOARD, MESSAGE_KEYBOARD_SHIFT_RELEASED);
                self.is_shift_pressed = false;
            }
            _ => {}
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_press(key: Key) -> rdev::Event {
        rdev::Event {
            time: std::time::SystemTime::now(),
            name: None,
            event_type: EventType::KeyPress(key),
        }
    }

    fn key_release(key: Key) -> rdev::Event {
        rdev::Event {
            time: std::time::SystemTime::now(),
            name: None,
            event_type: EventType::KeyRelease(key),
        }
    }

    #[test]
    fn test_hotkey_requires_both_modifiers_held() {
        let mut state = KeyboardState::default();

        assert!(state.process_event(key_press(Key::Alt)).is_none());
        assert!(state.process_event(key_press(Key::ShiftLeft)).is_none());

        let event = state.process_event(key_press(Key::KeyS));

        assert!(matches!(
            event,
            Some(GlobalKeyboardEvent::CaptureHotkeyPressed)
        ));
    }

    #[test]
    fn test_s_without_modifiers_is_ignored() {
        let mut state = KeyboardState::default();

        assert!(state.process_event(key_press(Key::KeyS)).is_none());
    }

    #[test]
    fn test_released_modifier_disarms_hotkey() {
        let mut state = KeyboardState::default();
        state.process_event(key_press(Key::Alt));
        state.process_event(key_press(Key::ShiftLeft));
        state.process_event(key_release(Key::Alt));

        assert!(state.process_event(key_press(Key::KeyS)).is_none());
    }

    #[test]
    fn test_escape_is_reported_regardless_of_modifiers() {
        let mut state = KeyboardState::default();

        let event = state.process_event(key_press(Key::Escape));

        assert!(matches!(event, Some(GlobalKeyboardEvent::EscapePressed)));
    }
}
