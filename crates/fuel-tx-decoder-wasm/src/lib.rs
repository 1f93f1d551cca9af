use fuel_tx_decoder::{decode_to_json, DecoderConfig};
use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;

fn config_from_json(options: Option<&str>) -> Result<DecoderConfig, String> {
    match options.map(str::trim) {
        None | Some("") => Ok(DecoderConfig::default()),
        Some(text) => serde_json::from_str(text).map_err(|e| format!("invalid decoder options: {e}")),
    }
}

fn decode_internal(hash: &str, options: Option<&str>) -> Value {
    match config_from_json(options) {
        Ok(config) => decode_to_json(hash, &config),
        Err(error) => error_value(error),
    }
}

fn error_value(message: String) -> Value {
    json!({ "error": message })
}

fn config_from_js(options: JsValue) -> Result<DecoderConfig, String> {
    if options.is_undefined() || options.is_null() {
        return Ok(DecoderConfig::default());
    }
    serde_wasm_bindgen::from_value(options).map_err(|e| format!("invalid decoder options: {e}"))
}

/// Decodes a transaction into a plain JS object: the decode result, or
/// `{ error }`. Never throws.
///
/// `options` is `undefined` or a partial `{ layout, uintCeiling, strict }`.
#[wasm_bindgen]
pub fn decode(hash: &str, options: JsValue) -> JsValue {
    let value = match config_from_js(options) {
        Ok(config) => decode_to_json(hash, &config),
        Err(error) => error_value(error),
    };
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).unwrap_or_else(|e| {
        let fallback = error_value(format!("failed to convert decode result: {e}"));
        fallback.serialize(&serializer).unwrap_or(JsValue::NULL)
    })
}

/// Same as [`decode`], returning the JSON text. `options` is JSON text too.
#[wasm_bindgen]
pub fn decode_json(hash: &str, options: Option<String>) -> String {
    decode_internal(hash, options.as_deref()).to_string()
}

#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::{config_from_json, decode_internal, error_value};
    use fuel_tx_decoder::{Layout, SAMPLE_SCRIPT_TX};
    use serde_json::json;

    #[test]
    fn options_default_when_missing() {
        assert_eq!(config_from_json(None).unwrap(), Default::default());
        assert_eq!(config_from_json(Some("  ")).unwrap(), Default::default());
        let config = config_from_json(Some(r#"{"layout":"compact"}"#)).unwrap();
        assert_eq!(config.layout, Layout::Compact);
    }

    #[test]
    fn decodes_sample() {
        let value = decode_internal(SAMPLE_SCRIPT_TX, None);
        assert_eq!(value["transaction"]["type"], json!(0));
        assert_eq!(value["transaction"]["outputsCount"], json!(5));
    }

    #[test]
    fn reports_errors_as_objects() {
        assert_eq!(
            decode_internal("0x06", None),
            json!({ "error": "Unsupported transaction type: 6" })
        );
        assert_eq!(error_value("boom".into()), json!({ "error": "boom" }));
        let bad_options = decode_internal(SAMPLE_SCRIPT_TX, Some("{\"layout\":\"wide\"}"));
        assert!(bad_options["error"]
            .as_str()
            .unwrap()
            .starts_with("invalid decoder options"));
    }
}
