use entmark_core::{Entity, MarkupLanguage, codec, render};
use wasm_bindgen::prelude::*;

/// Renders `text` with `entities` (an array of upstream entity records)
/// into the markup family named by `language` ("html", "markdown", or an
/// upstream parse-mode name; unrecognized names fall back to HTML).
#[wasm_bindgen]
pub fn render_markup(text: &str, entities: JsValue, language: &str) -> Result<String, JsValue> {
    let entities: Vec<Entity> = serde_wasm_bindgen::from_value(entities)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    let language = MarkupLanguage::from_name(language);
    render(text, &entities, language).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Entity-offset length of `text` (units, not bytes or codepoints).
#[wasm_bindgen]
pub fn unit_length(text: &str) -> usize {
    entmark_core::unit_len(text)
}

#[wasm_bindgen]
pub fn encode_token(bytes: &[u8]) -> String {
    codec::encode(bytes)
}

#[wasm_bindgen]
pub fn decode_token(token: &str) -> Result<Vec<u8>, JsValue> {
    codec::decode(token).map_err(|err| JsValue::from_str(&err.to_string()))
}
