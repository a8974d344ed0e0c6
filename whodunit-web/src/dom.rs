use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, BlobPropertyBag, Document, Headers, HtmlAnchorElement, Request, RequestInit, Response,
    Storage, Url, Window,
};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// HTTP status and body text of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

async fn read_reply(request: &Request) -> Result<HttpReply, JsValue> {
    let value = JsFuture::from(window().fetch_with_request(request)).await?;
    let response: Response = value.dyn_into()?;
    let body = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .unwrap_or_default();
    Ok(HttpReply {
        status: response.status(),
        body,
    })
}

/// `GET` a URL and return its status and body, whatever the status.
///
/// # Errors
/// Returns an error if the request cannot be sent or the body cannot be read.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn get_text(url: &str) -> Result<HttpReply, JsValue> {
    let init = RequestInit::new();
    init.set_method("GET");
    let request = Request::new_with_str_and_init(url, &init)?;
    read_reply(&request).await
}

/// `POST` a JSON body and return the reply status and body.
///
/// # Errors
/// Returns an error if the request cannot be sent or the body cannot be read.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn post_json(url: &str, json: &str) -> Result<HttpReply, JsValue> {
    let headers = Headers::new()?;
    headers.set("Content-Type", "application/json")?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(json));
    let request = Request::new_with_str_and_init(url, &init)?;
    read_reply(&request).await
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Write text to the system clipboard.
///
/// # Errors
/// Returns an error if the clipboard API rejects the write (for example when
/// the page is not focused or permission is denied).
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn write_clipboard(text: &str) -> Result<(), JsValue> {
    let promise = window().navigator().clipboard().write_text(text);
    JsFuture::from(promise).await?;
    Ok(())
}

/// Offer `body` to the user as a downloaded file.
///
/// # Errors
/// Returns an error if the blob, object URL, or anchor cannot be created.
pub fn download_text(file_name: &str, mime: &str, body: &str) -> Result<(), JsValue> {
    let parts = Array::of1(&JsValue::from_str(body));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document().create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    Url::revoke_object_url(&url)
}
