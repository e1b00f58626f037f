//! Thin wrappers over the browser APIs the dashboard needs.

use chrono::{Local, NaiveDate, NaiveDateTime, Utc};
use riego_domain::schedule::TimeOfDay;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Browser call failures.
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    #[error("no document available")]
    NoDocument,
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for BrowserError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Read a settings override from `localStorage`.
pub fn stored_override(key: &str) -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(key)
        .ok()?
}

/// Ask the operator with a blocking `confirm` dialog.
///
/// Returns `false` when no dialog can be shown.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Offer `contents` as a CSV file download named `file_name`.
///
/// # Errors
///
/// Returns an error when the blob, object URL or anchor cannot be created.
pub fn save_text_file(file_name: &str, contents: &str) -> Result<(), BrowserError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(BrowserError::NoDocument)?;

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type("text/csv");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|_| BrowserError::Js("created element is not an anchor".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url)?;
    Ok(())
}

/// Local wall-clock time.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Local time of day, minute precision.
pub fn local_time_of_day() -> TimeOfDay {
    TimeOfDay::from(&Local::now())
}

/// Today's date in UTC, used to name exports.
pub fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}
