//! Remote Access Gateway
//!
//! Typed async wrappers over the seven backend commands.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::bridge::Bridge;
use crate::models::{AppConfig, Todo};
use crate::wait::{wait_until, Timer};

// ========================
// Configuration & Errors
// ========================

/// How long to wait for the bridge to appear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayConfig {
    pub poll_interval: Duration,
    pub max_wait: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(50),
            max_wait: Duration::from_millis(5000),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("backend bridge unavailable after {waited_ms}ms")]
    BridgeUnavailable { waited_ms: u64 },
    #[error("{0}")]
    Backend(String),
    #[error("unexpected response to {command}: {message}")]
    Decode { command: String, message: String },
}

pub type GatewayResult<T> = Result<T, GatewayError>;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct AddTodoArgs<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

#[derive(Serialize)]
struct SaveConfigArgs<'a> {
    config: &'a AppConfig,
}

// ========================
// Gateway
// ========================

#[derive(Clone)]
pub struct Gateway {
    bridge: Arc<dyn Bridge>,
    timer: Arc<dyn Timer>,
    config: GatewayConfig,
    bridge_seen: Arc<AtomicBool>,
    /// Length of an earlier wait that ran out; 0 while none has
    gave_up_after_ms: Arc<AtomicU64>,
}

impl Gateway {
    pub fn new(bridge: Arc<dyn Bridge>, timer: Arc<dyn Timer>, config: GatewayConfig) -> Self {
        Self {
            bridge,
            timer,
            config,
            bridge_seen: Arc::new(AtomicBool::new(false)),
            gave_up_after_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn load_todos(&self) -> GatewayResult<Vec<Todo>> {
        self.call("load_todos", Value::Null).await
    }

    /// Callers trim and reject blank text first; the backend assigns the id.
    pub async fn add_todo(&self, text: &str) -> GatewayResult<Todo> {
        self.call("add_todo", to_args(&AddTodoArgs { text })?).await
    }

    pub async fn toggle_todo(&self, id: u32) -> GatewayResult<()> {
        self.call_unit("toggle_todo", to_args(&IdArgs { id })?).await
    }

    pub async fn delete_todo(&self, id: u32) -> GatewayResult<()> {
        self.call_unit("delete_todo", to_args(&IdArgs { id })?).await
    }

    pub async fn clear_completed(&self) -> GatewayResult<()> {
        self.call_unit("clear_completed", Value::Null).await
    }

    pub async fn get_config(&self) -> GatewayResult<AppConfig> {
        self.call("get_config", Value::Null).await
    }

    /// Replaces the whole stored configuration
    pub async fn save_config(&self, config: &AppConfig) -> GatewayResult<()> {
        self.call_unit("save_app_config", to_args(&SaveConfigArgs { config })?).await
    }

    /// Waits for the bridge at most once per gateway. After a wait has run
    /// out, later calls only check readiness again and never sleep.
    async fn ensure_bridge(&self) -> GatewayResult<()> {
        if self.bridge_seen.load(Ordering::Acquire) {
            return Ok(());
        }

        let gave_up_after_ms = self.gave_up_after_ms.load(Ordering::Acquire);
        if gave_up_after_ms > 0 {
            if !self.bridge.is_ready() {
                return Err(GatewayError::BridgeUnavailable { waited_ms: gave_up_after_ms });
            }
            self.bridge_seen.store(true, Ordering::Release);
            return Ok(());
        }

        let bridge = &self.bridge;
        wait_until(
            self.timer.as_ref(),
            || bridge.is_ready(),
            self.config.poll_interval,
            self.config.max_wait,
        )
        .await
        .map_err(|timed_out| {
            let waited_ms = timed_out.waited.as_millis() as u64;
            tracing::error!(waited_ms, "backend bridge never became available");
            self.gave_up_after_ms.store(waited_ms, Ordering::Release);
            GatewayError::BridgeUnavailable { waited_ms }
        })?;

        self.bridge_seen.store(true, Ordering::Release);
        Ok(())
    }

    async fn invoke(&self, command: &str, args: Value) -> GatewayResult<Value> {
        self.ensure_bridge().await?;
        tracing::debug!(command, "invoking backend");
        self.bridge.invoke(command, args).await.map_err(|message| {
            tracing::warn!(command, %message, "backend rejected command");
            GatewayError::Backend(message)
        })
    }

    async fn call<R: DeserializeOwned>(&self, command: &str, args: Value) -> GatewayResult<R> {
        let value = self.invoke(command, args).await?;
        serde_json::from_value(value).map_err(|e| GatewayError::Decode {
            command: command.to_string(),
            message: e.to_string(),
        })
    }

    async fn call_unit(&self, command: &str, args: Value) -> GatewayResult<()> {
        self.invoke(command, args).await.map(|_| ())
    }
}

fn to_args<T: Serialize>(args: &T) -> GatewayResult<Value> {
    serde_json::to_value(args).map_err(|e| GatewayError::Decode {
        command: "<arguments>".to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory backend following the same rules as the Tauri one.

    use std::collections::VecDeque;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::wait::testing::InstantTimer;

    #[derive(Default)]
    struct FakeState {
        todos: Vec<Todo>,
        config: Option<AppConfig>,
        calls: Vec<(String, Value)>,
        failures: VecDeque<(String, String)>,
    }

    /// Fake bridge; becomes ready after `ready_after` readiness checks
    #[derive(Default)]
    pub struct FakeBridge {
        state: Mutex<FakeState>,
        ready_after: usize,
        readiness_checks: AtomicUsize,
        never_ready: bool,
    }

    impl FakeBridge {
        pub fn with_todos(todos: Vec<Todo>) -> Self {
            let bridge = Self::default();
            bridge.state.lock().unwrap().todos = todos;
            bridge
        }

        pub fn ready_after(checks: usize) -> Self {
            Self { ready_after: checks, ..Self::default() }
        }

        pub fn never_ready() -> Self {
            Self { never_ready: true, ..Self::default() }
        }

        pub fn set_config(&self, config: AppConfig) {
            self.state.lock().unwrap().config = Some(config);
        }

        /// Make the next call to `command` reject with `message`
        pub fn fail_next(&self, command: &str, message: &str) {
            self.state
                .lock()
                .unwrap()
                .failures
                .push_back((command.to_string(), message.to_string()));
        }

        pub fn todos(&self) -> Vec<Todo> {
            self.state.lock().unwrap().todos.clone()
        }

        pub fn config(&self) -> Option<AppConfig> {
            self.state.lock().unwrap().config.clone()
        }

        pub fn calls(&self) -> Vec<String> {
            self.state.lock().unwrap().calls.iter().map(|(c, _)| c.clone()).collect()
        }

        pub fn last_args(&self, command: &str) -> Option<Value> {
            self.state
                .lock()
                .unwrap()
                .calls
                .iter()
                .rev()
                .find(|(c, _)| c == command)
                .map(|(_, a)| a.clone())
        }

        pub fn readiness_checks(&self) -> usize {
            self.readiness_checks.load(Ordering::SeqCst)
        }
    }

    #[async_trait(?Send)]
    impl Bridge for FakeBridge {
        fn is_ready(&self) -> bool {
            let checks = self.readiness_checks.fetch_add(1, Ordering::SeqCst) + 1;
            !self.never_ready && checks > self.ready_after
        }

        async fn invoke(&self, command: &str, args: Value) -> Result<Value, String> {
            let mut state = self.state.lock().unwrap();
            state.calls.push((command.to_string(), args.clone()));

            if let Some(pos) = state.failures.iter().position(|(c, _)| c == command) {
                let (_, message) = state.failures.remove(pos).unwrap();
                return Err(message);
            }

            match command {
                "load_todos" => Ok(json!(state.todos)),
                "add_todo" => {
                    let text = args["text"].as_str().unwrap_or_default().trim().to_string();
                    let id = state.todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
                    let todo = Todo { id, text, completed: false };
                    state.todos.push(todo.clone());
                    Ok(json!(todo))
                }
                "toggle_todo" => {
                    let id = args["id"].as_u64().unwrap_or_default() as u32;
                    let todo = state
                        .todos
                        .iter_mut()
                        .find(|t| t.id == id)
                        .ok_or_else(|| format!("Todo {} not found", id))?;
                    todo.completed = !todo.completed;
                    Ok(Value::Null)
                }
                "delete_todo" => {
                    let id = args["id"].as_u64().unwrap_or_default() as u32;
                    let before = state.todos.len();
                    state.todos.retain(|t| t.id != id);
                    if state.todos.len() == before {
                        return Err(format!("Todo {} not found", id));
                    }
                    Ok(Value::Null)
                }
                "clear_completed" => {
                    state.todos.retain(|t| !t.completed);
                    Ok(Value::Null)
                }
                "get_config" => Ok(json!(state.config.clone().unwrap_or_default())),
                "save_app_config" => {
                    let config: AppConfig =
                        serde_json::from_value(args["config"].clone()).map_err(|e| e.to_string())?;
                    state.config = Some(config);
                    Ok(Value::Null)
                }
                other => Err(format!("unknown command {}", other)),
            }
        }
    }

    pub fn gateway_over(bridge: Arc<FakeBridge>) -> (Gateway, Arc<InstantTimer>) {
        let timer = Arc::new(InstantTimer::default());
        let gateway = Gateway::new(bridge, timer.clone(), GatewayConfig::default());
        (gateway, timer)
    }
}
