//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod config_cmd;
mod todo_cmd;

pub use config_cmd::*;
pub use todo_cmd::*;
