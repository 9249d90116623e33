//! Tauri Commands for Application Config

use tauri::State;

use crate::domain::AppConfig;
use crate::repository::ConfigRepository;
use crate::AppState;

/// Current config, defaults when nothing is stored
#[tauri::command]
pub async fn get_config(state: State<'_, AppState>) -> Result<AppConfig, String> {
    log::info!("[get_config] loading app config");
    let repo = state.config_repo.lock().await;
    Ok(repo.load().await)
}

/// Replace the stored config
#[tauri::command]
pub async fn save_app_config(state: State<'_, AppState>, config: AppConfig) -> Result<(), String> {
    log::info!("[save_app_config] saving app config (language={})", config.language);
    let repo = state.config_repo.lock().await;
    repo.save(&config).await.map_err(|e| {
        log::error!("[save_app_config] {}", e);
        e.to_string()
    })
}
