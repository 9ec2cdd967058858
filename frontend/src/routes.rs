//! In-app routing. Pages rendered by this application switch in place and
//! push a history entry; every other path is a full navigation.

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    ParentsFromCsv,
    TitleCreate,
}

impl Route {
    pub fn recognize(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "" | "/dashboard" => Some(Route::Dashboard),
            "/fromcsv/parent" => Some(Route::ParentsFromCsv),
            "/messages/create/title" => Some(Route::TitleCreate),
            _ => None,
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::ParentsFromCsv => "/fromcsv/parent",
            Route::TitleCreate => "/messages/create/title",
        }
    }
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Records `path` in the session history without reloading.
pub fn push(path: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        history
            .push_state_with_url(&JsValue::NULL, "", Some(path))
            .ok();
    }
}

/// Leaves the application for `path`.
pub fn redirect(path: &str) {
    if let Some(window) = web_sys::window() {
        window.location().set_href(path).ok();
    }
}
