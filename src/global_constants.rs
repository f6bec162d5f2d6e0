#![allow(dead_code)]

pub const APPLICATION_NAME: &str = "ScreenSage - Desktop";
pub const APPLICATION_TITLE: &str = "ScreenSage";

pub const HOTKEY_CAPTURE: &str = "Alt+Shift+S";
pub const HOTKEY_CANCEL: &str = "Escape";
pub const HOTKEY_EXIT: &str = "Ctrl+C";

pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_PIPELINE: &str = "[PIPELINE]";
pub const LOG_TAG_REGION: &str = "[REGION]";
pub const LOG_TAG_FRAME: &str = "[FRAME]";
pub const LOG_TAG_DISPLAY: &str = "[DISPLAY]";
pub const LOG_TAG_KEYBOARD: &str = "[KEYBOARD]";
pub const LOG_TAG_POINTER: &str = "[POINTER]";
pub const LOG_TAG_VISION: &str = "[VISION]";
pub const LOG_TAG_SESSION: &str = "[SESSION]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";
pub const LOG_TAG_INSTANCE: &str = "[INSTANCE]";

pub const MESSAGE_KEYBOARD_ALT_PRESSED: &str = "Alt pressed";
pub const MESSAGE_KEYBOARD_ALT_RELEASED: &str = "Alt released";
pub const MESSAGE_KEYBOARD_SHIFT_PRESSED: &str = "Shift pressed";
pub const MESSAGE_KEYBOARD_SHIFT_RELEASED: &str = "Shift released";
pub const MESSAGE_KEYBOARD_HOTKEY_DETECTED: &str = "Alt+Shift+S detected - marking corner";
pub const MESSAGE_KEYBOARD_ESCAPE_PRESSED: &str = "Escape pressed - canceling";

pub const MESSAGE_POINTER_POSITION_FAILED: &str = "failed to get pointer position";

pub const USER_MESSAGE_FIRST_CORNER: &str =
    "[INFO] First corner marked. Move the pointer to the opposite corner and press Alt+Shift+S again.";
pub const USER_MESSAGE_SELECTION_CANCELED: &str = "[INFO] Selection canceled.";
pub const USER_MESSAGE_CAPTURING: &str = "[INFO] Capturing selection...";

pub const ERROR_CONTEXT_SCALE_FACTOR: &str = "Unable to get scale factor";
pub const ERROR_CONTEXT_CAPTURE_MONITOR: &str = "Unable to capture monitor";
pub const ERROR_CONTEXT_MONITOR_BOUNDS: &str = "Unable to read monitor bounds";

pub const OPENAI_CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const OPENAI_API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

pub const DEFAULT_MODEL_NAME: &str = "gpt-4o";
pub const DEFAULT_MAX_RESPONSE_TOKENS: u32 = 500;

pub const DEFAULT_CAPTURE_HOTKEY: &str = "Alt+Shift+S";

pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const SETTINGS_DIR_NAME: &str = "screensage";

pub const STARTUP_BANNER: &str = r#"
╔════════════════════════════════════════════════════════╗
║  ScreenSage - Desktop                                  ║
║                                                        ║
║  App is running in the background!                     ║
║                                                        ║
║  Press Alt+Shift+S to mark the first corner,           ║
║  then Alt+Shift+S again on the opposite corner         ║
║  Press Escape to cancel a started selection            ║
║  Press Ctrl+C to exit                                  ║
║                                                        ║
╚════════════════════════════════════════════════════════╝
"#;
