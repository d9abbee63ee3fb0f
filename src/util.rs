// Console logging helpers. Host builds (tests) have no console, so these are no-ops there.

#[cfg(target_arch = "wasm32")]
pub fn clog(msg: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(target_arch = "wasm32")]
pub fn cwarn(msg: &str) {
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clog(msg: &str) {
    let _ = msg;
}

#[cfg(not(target_arch = "wasm32"))]
pub fn cwarn(msg: &str) {
    let _ = msg;
}
