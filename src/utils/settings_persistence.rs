use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use crate::error::Result;
use crate::models::AppSettings;

const SETTINGS_FILE: &str = "settings.json";

pub fn get_settings_file_path() -> PathBuf {
    PathBuf::from(SETTINGS_FILE)
}

pub fn read_app_settings(file_path: &Path) -> Result<AppSettings> {
    let content = fs::read_to_string(file_path)?;
    Ok(serde_json::from_str::<AppSettings>(&content)?)
}

pub fn load_app_settings_from(file_path: &Path) -> AppSettings {
    if !file_path.exists() {
        info!("No existing settings found, using defaults");
        return AppSettings::default();
    }

    match read_app_settings(file_path) {
        Ok(mut settings) => {
            settings.set_text_scale(settings.text_scale);
            info!(
                text_scale = settings.text_scale,
                always_on_top = settings.always_on_top,
                "Loaded settings"
            );
            settings
        }
        Err(e) => {
            warn!("Error loading settings: {}. Using defaults.", e);
            AppSettings::default()
        }
    }
}

pub fn load_app_settings() -> AppSettings {
    load_app_settings_from(&get_settings_file_path())
}

pub fn save_app_settings_to(settings: &AppSettings, file_path: &Path) -> Result<()> {
    let json_content = serde_json::to_string_pretty(settings)?;

    let mut file = fs::File::create(file_path)?;
    file.write_all(json_content.as_bytes())?;
    file.flush()?;

    info!(path = %file_path.display(), "Saved settings");
    Ok(())
}

pub fn auto_save_app_settings(settings: &AppSettings) {
    if let Err(e) = save_app_settings_to(settings, &get_settings_file_path()) {
        warn!("Failed to auto-save settings: {}", e);
    }
}
