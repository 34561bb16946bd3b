//! Copy-to-clipboard with a confirmation alert.

use gloo::console;
use gloo::dialogs::alert;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{JsFuture, spawn_local};

/// How a clipboard write ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

impl CopyOutcome {
    /// Text shown in the alert after the write settles.
    pub fn message(self) -> &'static str {
        match self {
            CopyOutcome::Copied => "Copy to Clipboard",
            CopyOutcome::Failed => "Failed to Copy to Clipboard",
        }
    }
}

/// Write `text` to the system clipboard.
///
/// The write runs on the browser event loop; the outcome is logged and
/// reported with an alert once the promise settles.
pub fn copy_to_clipboard(text: &str) {
    let text = text.to_string();
    spawn_local(async move {
        let outcome = match write_text(&text).await {
            Ok(()) => {
                console::log!("Copied to clipboard:", text.as_str());
                CopyOutcome::Copied
            }
            Err(err) => {
                console::error!("Failed to copy!", err);
                CopyOutcome::Failed
            }
        };
        alert(outcome.message());
    });
}

async fn write_text(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.map(|_| ())
}
