//! Console logging: `console_log` routes the `log` facade to the browser
//! console. Pure modules only use the facade, so native tests need no sink.

use log::LevelFilter;
use wasm_bindgen::JsValue;

/// Install the console logger at `level`. When a logger is already installed
/// only the max level is adjusted.
pub fn init(level: LevelFilter) {
    if let Some(lvl) = level.to_level() {
        if let Err(err) = console_log::init_with_level(lvl) {
            web_sys::console::debug_1(&JsValue::from_str(&format!("console logger already set: {err}")));
        }
    }
    log::set_max_level(level);
}

/// Styled startup banner (decorative, not routed through `log`).
pub fn welcome_banner() {
    let font = "font-family: \"Orbitron\", monospace;";
    web_sys::console::log_5(
        &JsValue::from_str(
            "\n%cWelcome to Amit Verma's Portfolio! 🤖\n%cML Engineer & AI Enthusiast\n%cBuilding, Running & Fine-tuning Machine Learning Models\n\n%cCheck out my projects at: https://github.com/lord230\n",
        ),
        &JsValue::from_str(&format!("color: #ffffff; font-size: 20px; font-weight: bold; {font}")),
        &JsValue::from_str(&format!("color: #cccccc; font-size: 14px; {font}")),
        &JsValue::from_str(&format!("color: #999999; font-size: 12px; {font}")),
        &JsValue::from_str(&format!("color: #ffffff; font-size: 12px; {font}")),
    );
}
