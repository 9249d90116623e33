//! Backend Bridge
//!
//! The raw channel to the Tauri backend: command name plus JSON arguments
//! in, JSON out. Typed wrappers live in `gateway`.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Transport used by the gateway
#[async_trait(?Send)]
pub trait Bridge: Send + Sync {
    /// Whether the backend can be reached yet
    fn is_ready(&self) -> bool;

    /// Run a backend command. Rejections come back as display strings.
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, String>;
}

/// `window.__TAURI__.core.invoke`, injected by Tauri (`withGlobalTauri`)
#[derive(Debug, Clone, Copy, Default)]
pub struct TauriBridge;

impl TauriBridge {
    fn invoke_fn() -> Option<js_sys::Function> {
        let window = web_sys::window()?;
        let tauri = js_sys::Reflect::get(&window, &JsValue::from_str("__TAURI__")).ok()?;
        let core = js_sys::Reflect::get(&tauri, &JsValue::from_str("core")).ok()?;
        let invoke = js_sys::Reflect::get(&core, &JsValue::from_str("invoke")).ok()?;
        invoke.dyn_into::<js_sys::Function>().ok()
    }
}

#[async_trait(?Send)]
impl Bridge for TauriBridge {
    fn is_ready(&self) -> bool {
        Self::invoke_fn().is_some()
    }

    async fn invoke(&self, command: &str, args: Value) -> Result<Value, String> {
        let js_args = if args.is_null() {
            JsValue::NULL
        } else {
            args.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
                .map_err(|e| format!("Serialization error: {}", e))?
        };

        let result = invoke(command, js_args).await.map_err(js_error_to_string)?;
        serde_wasm_bindgen::from_value(result).map_err(|e| format!("Response error: {}", e))
    }
}

fn js_error_to_string(err: JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{:?}", err)
}
