// Browser console logging. No-ops off wasm so the core runs under `cargo test`.
use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    if cfg!(target_arch = "wasm32") {
        web_sys::console::log_1(&JsValue::from_str(msg));
    }
}

pub fn cwarn(msg: &str) {
    if cfg!(target_arch = "wasm32") {
        web_sys::console::warn_1(&JsValue::from_str(msg));
    }
}

pub fn cerror(msg: &str) {
    if cfg!(target_arch = "wasm32") {
        web_sys::console::error_1(&JsValue::from_str(msg));
    }
}
