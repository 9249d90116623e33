//! Tauri Todo Backend
//!
//! Layered architecture:
//! - domain: Todo and config entities, shared errors
//! - repository: JSON file storage behind async traits
//! - commands: Tauri command handlers
//! - paths: where the files live

use tauri::Manager;
use tokio::sync::Mutex;

mod commands;
mod domain;
mod paths;
mod repository;

use repository::{JsonConfigRepository, JsonTodoRepository};

/// Application state shared across commands
pub struct AppState {
    pub todo_repo: Mutex<JsonTodoRepository>,
    pub config_repo: Mutex<JsonConfigRepository>,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            rolling_logger::init_logger(app_handle.path().app_log_dir()?, "TauriTodo")?;

            let todo_repo = JsonTodoRepository::new(paths::todos_file(&paths::todo_dir()?));
            let config_path = paths::config_file(&app_handle.path().app_data_dir()?);
            log::info!(
                "App setup starting (todos: {}, config: {})",
                todo_repo.path().display(),
                config_path.display()
            );

            tauri::async_runtime::block_on(todo_repo.initialize())?;

            app.manage(AppState {
                todo_repo: Mutex::new(todo_repo),
                config_repo: Mutex::new(JsonConfigRepository::new(config_path)),
            });

            let _ = rolling_logger::info("State managed, todo file ready");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Todos
            commands::load_todos,
            commands::add_todo,
            commands::toggle_todo,
            commands::delete_todo,
            commands::clear_completed,
            // Config
            commands::get_config,
            commands::save_app_config,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
