use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::models::AnalysisMode;
use crate::global_constants::{
    DEFAULT_CAPTURE_HOTKEY, DEFAULT_MAX_RESPONSE_TOKENS, DEFAULT_MODEL_NAME, LOG_TAG_SETTINGS,
    OPENAI_API_KEY_ENV_VAR, SETTINGS_DIR_NAME, SETTINGS_FILE_NAME,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    pub capture_hotkey: String,
    #[serde(default)]
    pub default_mode: AnalysisMode,
    #[serde(default)]
    pub openai_api_key: String,
    #[serde(default = "default_model_name")]
    pub model_name: String,
    #[serde(default = "default_max_response_tokens")]
    pub max_response_tokens: u32,
    #[serde(default = "default_copy_answer_to_clipboard")]
    pub copy_answer_to_clipboard: bool,
    #[serde(default)]
    pub install_id: Option<String>,
}

fn default_model_name() -> String {
    DEFAULT_MODEL_NAME.to_string()
}

fn default_max_response_tokens() -> u32 {
    DEFAULT_MAX_RESPONSE_TOKENS
}

fn default_copy_answer_to_clipboard() -> bool {
    true
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            capture_hotkey: DEFAULT_CAPTURE_HOTKEY.to_string(),
            default_mode: AnalysisMode::default(),
            openai_api_key: String::new(),
            model_name: default_model_name(),
            max_response_tokens: default_max_response_tokens(),
            copy_answer_to_clipboard: default_copy_answer_to_clipboard(),
            install_id: None,
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let current_install_id = Self::get_or_create_install_id();
        let settings_path = Self::get_settings_file_path()?;

        if !settings_path.exists() {
            log::info!("{} No settings file found, using defaults", LOG_TAG_SETTINGS);
            let mut default_settings = Self::default();
            default_settings.install_id = current_install_id.clone();
            default_settings.save()?;
            return Ok(default_settings);
        }

        let contents = fs::read_to_string(&settings_path)?;
        let mut settings: UserSettings = serde_json::from_str(&contents)?;

        if Self::is_new_installation(&settings.install_id, &current_install_id) {
            log::info!(
                "{} New installation detected, resetting settings",
                LOG_TAG_SETTINGS
            );
            let mut default_settings = Self::default();
            default_settings.install_id = current_install_id;
            default_settings.save()?;
            return Ok(default_settings);
        }

        settings.install_id = current_install_id;

        log::info!(
            "{} Loaded settings from {:?}",
            LOG_TAG_SETTINGS,
            settings_path
        );
        log::debug!(
            "{} Default mode: {}, model: {}",
            LOG_TAG_SETTINGS,
            settings.default_mode,
            settings.model_name
        );

        Ok(settings)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let settings_path = Self::get_settings_file_path()?;

        if let Some(parent) = settings_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&settings_path, contents)?;

        log::info!("{} Saved settings to {:?}", LOG_TAG_SETTINGS, settings_path);
        Ok(())
    }

    /// The API key the vision adapter should use. The environment always
    /// wins over the settings file, so a key in the file never shadows a
    /// freshly exported one.
    pub fn resolved_api_key(&self) -> String {
        let env_value = std::env::var(OPENAI_API_KEY_ENV_VAR).ok();
        Self::pick_api_key(env_value, &self.openai_api_key)
    }

    fn pick_api_key(env_value: Option<String>, stored_value: &str) -> String {
        match env_value {
            Some(key) if !key.trim().is_empty() => key,
            _ => stored_value.to_string(),
        }
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(SETTINGS_DIR_NAME);

        Ok(config_dir.join(SETTINGS_FILE_NAME))
    }

    fn get_or_create_install_id() -> Option<String> {
        let install_id_path = match Self::get_install_id_path() {
            Some(path) => path,
            None => {
                log::debug!(
                    "{} Could not determine install ID path",
                    LOG_TAG_SETTINGS
                );
                return None;
            }
        };

        if install_id_path.exists() {
            match fs::read_to_string(&install_id_path) {
                Ok(id) => {
                    let id = id.trim().to_string();
                    log::debug!("{} Found existing install ID: {}", LOG_TAG_SETTINGS, id);
                    return Some(id);
                }
                Err(error) => {
                    log::warn!("{} Failed to read install ID: {}", LOG_TAG_SETTINGS, error);
                }
            }
        }

        let new_id = Uuid::new_v4().to_string();
        log::info!("{} Generated new install ID: {}", LOG_TAG_SETTINGS, new_id);

        if let Some(parent) = install_id_path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        match fs::write(&install_id_path, &new_id) {
            Ok(()) => {
                log::info!(
                    "{} Saved install ID to {:?}",
                    LOG_TAG_SETTINGS,
                    install_id_path
                );
            }
            Err(error) => {
                log::warn!("{} Failed to save install ID: {}", LOG_TAG_SETTINGS, error);
            }
        }

        Some(new_id)
    }

    fn get_install_id_path() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        Some(exe_dir.join(".install_id"))
    }

    fn is_new_installation(saved_id: &Option<String>, current_id: &Option<String>) -> bool {
        match (saved_id, current_id) {
            (Some(saved), Some(current)) => {
                let is_different = saved != current;
                if is_different {
                    log::info!(
                        "{} Install ID mismatch: saved={}, current={}",
                        LOG_TAG_SETTINGS,
                        saved,
                        current
                    );
                }
                is_different
            }
            _ => false,
        }
    }
}
