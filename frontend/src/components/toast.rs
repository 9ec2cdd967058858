//! Transient confirmation messages shown at the bottom of the screen.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const TOAST_MS: u32 = 3000;

/// Injects a toast with a bold title and an optional description, removed
/// again after a few seconds.
pub fn show_toast(title: &str, description: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Ok(heading), Some(body)) = (
        document.create_element("div"),
        document.create_element("strong"),
        document.body(),
    ) else {
        return;
    };

    heading.set_text_content(Some(title));
    toast.append_child(&heading).ok();
    if !description.is_empty() {
        if let Ok(detail) = document.create_element("div") {
            detail.set_text_content(Some(description));
            toast.append_child(&detail).ok();
        }
    }

    let html_toast: HtmlElement = toast.unchecked_into();
    html_toast.set_class_name("toast");
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("right", "20px").ok();
    style.set_property("background", "rgba(0, 0, 0, 0.85)").ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "12px 20px").ok();
    style.set_property("border-radius", "6px").ok();
    style.set_property("z-index", "10000").ok();
    style.set_property("max-width", "360px").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

/// Error variant of [`show_toast`].
pub fn show_error_toast(title: &str, description: &str) {
    gloo_console::error!(format!("{}: {}", title, description));
    show_toast(title, description);
}
