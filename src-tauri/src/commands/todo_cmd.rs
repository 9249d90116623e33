//! Tauri Commands for the Todo List
//!
//! Exposes todo operations to the frontend via Tauri IPC.

use tauri::State;

use crate::domain::Todo;
use crate::repository::TodoRepository;
use crate::AppState;

/// List all todos
#[tauri::command]
pub async fn load_todos(state: State<'_, AppState>) -> Result<Vec<Todo>, String> {
    log::info!("[load_todos] loading todo list");
    let repo = state.todo_repo.lock().await;
    let todos = repo.list().await.map_err(|e| {
        log::error!("[load_todos] {}", e);
        e.to_string()
    })?;
    log::info!("[load_todos] loaded {} todos", todos.len());
    Ok(todos)
}

/// Create a new todo; the id is assigned here
#[tauri::command]
pub async fn add_todo(state: State<'_, AppState>, text: String) -> Result<Todo, String> {
    log::info!("[add_todo] adding {:?}", text);
    let repo = state.todo_repo.lock().await;
    let todo = repo.add(&text).await.map_err(|e| {
        log::error!("[add_todo] {}", e);
        e.to_string()
    })?;
    log::info!("[add_todo] created todo {}", todo.id);
    Ok(todo)
}

/// Toggle todo completion status
#[tauri::command]
pub async fn toggle_todo(state: State<'_, AppState>, id: u32) -> Result<(), String> {
    log::info!("[toggle_todo] toggling todo {}", id);
    let repo = state.todo_repo.lock().await;
    let todo = repo.toggle(id).await.map_err(|e| {
        log::error!("[toggle_todo] {}", e);
        e.to_string()
    })?;
    log::info!("[toggle_todo] todo {} completed={}", todo.id, todo.completed);
    Ok(())
}

/// Delete todo
#[tauri::command]
pub async fn delete_todo(state: State<'_, AppState>, id: u32) -> Result<(), String> {
    log::info!("[delete_todo] deleting todo {}", id);
    let repo = state.todo_repo.lock().await;
    repo.delete(id).await.map_err(|e| {
        log::error!("[delete_todo] {}", e);
        e.to_string()
    })
}

/// Remove every completed todo
#[tauri::command]
pub async fn clear_completed(state: State<'_, AppState>) -> Result<(), String> {
    log::info!("[clear_completed] clearing completed todos");
    let repo = state.todo_repo.lock().await;
    let removed = repo.clear_completed().await.map_err(|e| {
        log::error!("[clear_completed] {}", e);
        e.to_string()
    })?;
    log::info!("[clear_completed] removed {} todos", removed);
    Ok(())
}
