//! HTTP client for the story backend. All calls go through the browser fetch
//! API; JSON bodies in, JSON or raw audio bytes out. Callers translate
//! [`ApiError`] into their fixed user-facing messages.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::config;
use crate::error::ApiError;
use crate::models::stories::{NewStoryRequest, StoryView};

/// Fetches the full list of previously generated stories, newest first as
/// the backend orders them.
pub async fn fetch_stories() -> Result<Vec<StoryView>, ApiError> {
    let url = format!("{}/stories", config::api_base());
    let request = Request::new_with_str(&url).map_err(js_error)?;
    let response = send(&request).await?;
    parse_json(&response).await
}

/// Requests a new story. Suspends for as long as the backend needs; the
/// caller keeps its progress clock ticking in the meantime.
pub async fn generate_story(request: &NewStoryRequest) -> Result<StoryView, ApiError> {
    let url = format!("{}/generate-story", config::api_base());
    let request = json_request(&url, request)?;
    let response = send(&request).await?;
    parse_json(&response).await
}

/// Synthesizes narration for a story and returns the raw audio bytes.
pub async fn synthesize_narration(story_id: &str) -> Result<Vec<u8>, ApiError> {
    let url = format!("{}/text-to-speech", config::api_base());
    let payload = serde_json::json!({ "story_id": story_id });
    let request = json_request(&url, &payload)?;
    let response = send(&request).await?;
    let buffer = JsFuture::from(response.array_buffer().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

fn json_request<T: Serialize>(url: &str, payload: &T) -> Result<Request, ApiError> {
    let headers = Headers::new().map_err(js_error)?;
    headers
        .append("Content-Type", "application/json")
        .map_err(js_error)?;

    let body = serde_json::to_string(payload).map_err(|e| ApiError::Decode(e.to_string()))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers.into());
    init.set_body(&JsValue::from_str(&body));

    Request::new_with_str_and_init(url, &init).map_err(js_error)
}

async fn send(request: &Request) -> Result<Response, ApiError> {
    let window =
        web_sys::window().ok_or_else(|| ApiError::Network("no window object".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(js_error)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ApiError::Decode("fetch did not yield a Response".to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

async fn parse_json<T: DeserializeOwned>(response: &Response) -> Result<T, ApiError> {
    let json = JsFuture::from(response.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::Network(format!("{err:?}"))
}
