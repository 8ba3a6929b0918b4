//! Clipboard writes and blocking alerts.

use quire_core::PlatformError;
use wasm_bindgen::JsValue;

/// Write plain text using the async Clipboard API.
pub async fn write_clipboard_text(text: &str) -> Result<(), PlatformError> {
    let window = web_sys::window().ok_or_else(|| PlatformError::from("no window"))?;
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(describe)?;
    tracing::debug!("Wrote {} bytes to clipboard", text.len());
    Ok(())
}

/// Show a blocking alert dialog.
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        tracing::warn!("alert without a window: {}", message);
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        tracing::warn!("alert failed: {}", describe(e));
    }
}

fn describe(value: JsValue) -> PlatformError {
    value
        .as_string()
        .or_else(|| {
            js_sys::JSON::stringify(&value)
                .ok()
                .and_then(|s| s.as_string())
        })
        .unwrap_or_else(|| String::from("unknown JS error"))
        .into()
}
