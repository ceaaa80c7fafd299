//! JavaScript bindings for the shell engine
//!
//! Views cross the boundary as JSON strings; the host parses them and keeps
//! its own component state in sync after each call.

use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::config::WmConfig;
use crate::engine::ShellEngine;
use crate::error::WmError;
use crate::input::InputResult;
use crate::types::WindowId;
use crate::viewport::Viewport;

fn to_js_error(err: WmError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|err| to_js_error(err.into()))
}

fn id_from_js(id: f64) -> WindowId {
    id as WindowId
}

/// Shell engine handle owned by the page
#[wasm_bindgen]
pub struct WasmShell {
    engine: ShellEngine,
}

#[wasm_bindgen]
impl WasmShell {
    /// Create an engine for the current browser viewport
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, header_height: f32) -> WasmShell {
        WasmShell {
            engine: ShellEngine::new(Viewport::new(width, height, header_height)),
        }
    }

    /// Create an engine with a JSON configuration document
    pub fn with_config(
        width: f32,
        height: f32,
        header_height: f32,
        config_json: &str,
    ) -> Result<WasmShell, JsValue> {
        let config = WmConfig::from_json(config_json).map_err(to_js_error)?;
        Ok(WasmShell {
            engine: ShellEngine::with_config(Viewport::new(width, height, header_height), config),
        })
    }

    /// Browser window resized
    pub fn set_viewport(&mut self, width: f32, height: f32, header_height: f32) {
        self.engine
            .set_viewport(Viewport::new(width, height, header_height));
    }

    /// Register `callback(title, id)` for newly opened multi-instance windows
    pub fn on_window_opened(&mut self, callback: js_sys::Function) {
        self.engine.windows.on_window_opened(move |title: &str, id: WindowId| {
            if let Err(err) = callback.call2(
                &JsValue::NULL,
                &JsValue::from_str(title),
                &JsValue::from_f64(id as f64),
            ) {
                web_sys::console::warn_2(&JsValue::from_str("[zos-wm] onWindowOpened threw"), &err);
            }
        });
    }

    /// Use a plain `{ key: text }` object for window titles
    pub fn set_string_table(&mut self, table: js_sys::Object) {
        self.engine.windows.set_string_table(move |key: &str| {
            js_sys::Reflect::get(&table, &JsValue::from_str(key))
                .ok()
                .and_then(|value| value.as_string())
        });
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Open a window; `payload_json` may be empty
    pub fn open(&mut self, kind: &str, payload_json: &str) -> Result<f64, JsValue> {
        let payload = if payload_json.trim().is_empty() {
            None
        } else {
            let value: Value = serde_json::from_str(payload_json)
                .map_err(|err| to_js_error(err.into()))?;
            Some(value)
        };
        let id = self.engine.open_by_id(kind, payload).map_err(to_js_error)?;
        Ok(id as f64)
    }

    pub fn close(&mut self, id: f64) {
        self.engine.close_window(id_from_js(id));
    }

    pub fn minimize(&mut self, id: f64) {
        self.engine.minimize_window(id_from_js(id));
    }

    pub fn maximize(&mut self, id: f64) {
        self.engine.maximize_window(id_from_js(id));
    }

    pub fn focus(&mut self, id: f64) {
        self.engine.focus_window(id_from_js(id));
    }

    pub fn move_window(&mut self, id: f64, x: f32, y: f32) {
        self.engine.move_window(id_from_js(id), x, y);
    }

    pub fn resize_window(&mut self, id: f64, width: f32, height: f32) {
        self.engine.resize_window(id_from_js(id), width, height);
    }

    pub fn tray_click(&mut self, id: f64) {
        self.engine.tray_click(id_from_js(id));
    }

    pub fn taskbar_click(&mut self, id: f64) {
        self.engine.taskbar_click(id_from_js(id));
    }

    // =========================================================================
    // Pointer input (results are JSON `InputResult`s)
    // =========================================================================

    pub fn pointer_down(&mut self, x: f32, y: f32) -> Result<String, JsValue> {
        let result = self.engine.handle_pointer_down(x, y);
        to_json(&result)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> Result<String, JsValue> {
        let result = self.engine.handle_pointer_move(x, y);
        to_json(&result)
    }

    pub fn pointer_up(&mut self) -> Result<String, JsValue> {
        let result = self.engine.handle_pointer_up();
        to_json(&result)
    }

    /// Title bar pointer-down from host-rendered chrome
    pub fn start_move_drag(&mut self, id: f64, x: f32, y: f32) -> bool {
        self.engine.start_move_drag(id_from_js(id), x, y) == InputResult::Handled
    }

    /// Resize handle pointer-down from host-rendered chrome
    pub fn start_resize_drag(&mut self, id: f64, direction: &str, x: f32, y: f32) -> bool {
        self.engine
            .start_resize_drag(id_from_js(id), direction, x, y)
            == InputResult::Handled
    }

    pub fn is_gesture_active(&self) -> bool {
        self.engine.input.is_active()
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    /// All windows in open order
    pub fn windows_json(&self) -> Result<String, JsValue> {
        let windows: Vec<_> = self.engine.windows.windows().collect();
        to_json(&windows)
    }

    /// Visible windows back to front
    pub fn frames_json(&self) -> Result<String, JsValue> {
        to_json(&self.engine.frames())
    }

    pub fn tray_json(&self) -> Result<String, JsValue> {
        to_json(&self.engine.tray_items())
    }

    pub fn taskbar_json(&self) -> Result<String, JsValue> {
        to_json(&self.engine.taskbar_items())
    }

    /// Focused window id, or -1 when every window is minimized or closed
    pub fn focused(&self) -> f64 {
        self.engine
            .windows
            .focused()
            .map(|id| id as f64)
            .unwrap_or(-1.0)
    }
}
