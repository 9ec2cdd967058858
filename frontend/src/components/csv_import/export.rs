//! Download of the error report the backend echoes back.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub const REPORT_FILE_NAME: &str = "errors.csv";

/// How long the object URL outlives the click that starts the download.
const REVOKE_DELAY_MS: u32 = 1000;
const _: () = assert!(REVOKE_DELAY_MS >= 100);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub text: String,
}

impl Download {
    /// `None` when there is nothing to download or nowhere to save it.
    /// Invalid UTF-8 is replaced rather than refused.
    pub fn prepare(filename: &str, buffer: &[u8]) -> Option<Self> {
        if filename.is_empty() || buffer.is_empty() {
            return None;
        }
        Some(Self {
            filename: filename.to_string(),
            text: String::from_utf8_lossy(buffer).into_owned(),
        })
    }
}

/// Saves `buffer` as a text file named `filename`. Returns whether a
/// download was started.
pub fn export(filename: &str, buffer: &[u8]) -> bool {
    let Some(download) = Download::prepare(filename, buffer) else {
        return false;
    };
    match trigger(&download) {
        Ok(()) => true,
        Err(err) => {
            gloo_console::error!("Export failed:", err);
            false
        }
    }
}

fn trigger(download: &Download) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&download.text));
    let options = BlobPropertyBag::new();
    options.set_type("text/plain;charset=utf-8");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(&download.filename);
    anchor.style().set_property("display", "none")?;

    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;

    // The browser reads the blob after `click` returns.
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(REVOKE_DELAY_MS).await;
        if let Err(err) = Url::revoke_object_url(&url) {
            gloo_console::warn!("Could not release the export URL:", err);
        }
    });
    Ok(())
}
