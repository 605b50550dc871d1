// Browser fetch of the word-association list.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::words::parse_word_list;
use crate::error::{GameError, js_message};

/// GET `url` and parse the body as a word list. Any failure is returned to the
/// caller, which degrades to the fallback vocabulary.
pub async fn fetch_words(url: &str) -> Result<Vec<String>, GameError> {
    let window = web_sys::window().ok_or(GameError::NoWindow)?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| GameError::Fetch(js_message(&e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| GameError::Fetch(js_message(&e)))?;
    if !resp.ok() {
        return Err(GameError::HttpStatus(resp.status()));
    }
    let body = JsFuture::from(resp.text().map_err(GameError::dom)?)
        .await
        .map_err(|e| GameError::Fetch(js_message(&e)))?;
    let body = body
        .as_string()
        .ok_or_else(|| GameError::Fetch("response body is not text".to_string()))?;
    parse_word_list(&body)
}
