// Console logging helper. The console binding only exists in the browser, so native builds
// (unit tests) swallow the message.

#[cfg(target_arch = "wasm32")]
pub fn clog(msg: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clog(msg: &str) {
    let _ = msg; // keep param to avoid warnings
}
