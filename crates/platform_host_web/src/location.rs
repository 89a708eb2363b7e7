//! Browser location and viewport queries.

use serde::{Deserialize, Serialize};

/// Fallback viewport used when no browser window is available.
pub const FALLBACK_VIEWPORT: ViewportSize = ViewportSize {
    width: 1024,
    height: 768,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Browser viewport size in CSS pixels.
pub struct ViewportSize {
    /// Inner width.
    pub width: i32,
    /// Inner height.
    pub height: i32,
}

/// Returns the raw `location.search` string (including the leading `?`), or an empty string.
pub fn current_query_string() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

/// Drops the query string from the address bar without adding a history entry.
pub fn clear_query_string() -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or_else(|| "no browser window".to_string())?;
        let location = window.location();
        if location.search().map(|search| search.is_empty()).unwrap_or(true) {
            return Ok(());
        }
        let path = location
            .pathname()
            .map_err(|err| format!("location.pathname failed: {err:?}"))?;
        window
            .history()
            .and_then(|history| {
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path))
            })
            .map_err(|err| format!("history.replaceState failed: {err:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Ok(())
    }
}

/// Returns the current browser viewport size, falling back to [`FALLBACK_VIEWPORT`].
pub fn viewport_size() -> ViewportSize {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT.width);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT.height);
            return ViewportSize { width, height };
        }
    }

    FALLBACK_VIEWPORT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_build_has_empty_query_and_fallback_viewport() {
        assert!(current_query_string().is_empty());
        assert_eq!(clear_query_string(), Ok(()));
        assert_eq!(viewport_size(), FALLBACK_VIEWPORT);
    }
}
