// WebAssembly bindings for the browser shell
// Structured values cross the boundary as JSON strings
use crate::config::Preferences;
use crate::password;
use crate::text;
use crate::time;
use crate::units::{self, Category, ConversionRequest, ConverterAction, ConverterState};
use chrono::{DateTime, Utc};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct DevkitWasm {}

impl Default for DevkitWasm {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_category(key: &str) -> Result<Category, JsValue> {
    key.parse::<Category>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T, what: &str) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize {}: {}", what, e)))
}

#[wasm_bindgen]
impl DevkitWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {}
    }

    /// Convert a typed value; only an unknown category key is an error
    #[wasm_bindgen]
    pub fn convert(
        &self,
        value: &str,
        from_unit: &str,
        to_unit: &str,
        category: &str,
    ) -> Result<String, JsValue> {
        let category = parse_category(category)?;
        Ok(units::convert(value, from_unit, to_unit, category))
    }

    /// Convert from a JSON ConversionRequest
    /// {"value": "1", "fromUnit": "meters", "toUnit": "feet", "category": "length"}
    #[wasm_bindgen]
    pub fn convert_request(&self, request_json: &str) -> Result<String, JsValue> {
        let request: ConversionRequest = serde_json::from_str(request_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse request JSON: {}", e)))?;
        Ok(units::convert_request(&request))
    }

    /// Returns JSON array of categories with their units in display order
    #[wasm_bindgen]
    pub fn categories(&self) -> Result<String, JsValue> {
        to_json(units::categories(), "categories")
    }

    /// Returns category keys as a JS array, for tab rendering
    #[wasm_bindgen]
    pub fn category_keys(&self) -> js_sys::Array {
        Category::ALL
            .iter()
            .map(|c| JsValue::from_str(c.key()))
            .collect()
    }

    /// Returns JSON array of quick reference rows for a category
    #[wasm_bindgen]
    pub fn quick_reference(&self, category: &str) -> Result<String, JsValue> {
        let category = parse_category(category)?;
        to_json(&units::quick_reference(category), "quick reference")
    }

    /// Initial converter state, opened on the given category when one is passed
    #[wasm_bindgen]
    pub fn converter_new(&self, category: Option<String>) -> Result<String, JsValue> {
        let state = match category {
            Some(key) => ConverterState::for_category(parse_category(&key)?),
            None => ConverterState::new(),
        };
        to_json(&state, "converter state")
    }

    /// Apply one action to a converter state and return the new state
    /// action_json: {"type": "setCategory", "category": "weight"} | {"type": "swap"} | ...
    #[wasm_bindgen]
    pub fn converter_apply(&self, state_json: &str, action_json: &str) -> Result<String, JsValue> {
        let mut state: ConverterState = serde_json::from_str(state_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse state JSON: {}", e)))?;
        let action: ConverterAction = serde_json::from_str(action_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse action JSON: {}", e)))?;

        state.apply(action);
        to_json(&state, "converter state")
    }

    /// Returns JSON TextStats for the text
    #[wasm_bindgen]
    pub fn count_stats(&self, text: &str) -> Result<String, JsValue> {
        to_json(&text::count_stats(text), "stats")
    }

    /// Returns JSON array of {title, content}
    #[wasm_bindgen]
    pub fn sample_texts(&self) -> Result<String, JsValue> {
        to_json(text::sample_texts(), "sample texts")
    }

    /// Returns JSON array of {value, label, offset} for the world clock
    #[wasm_bindgen]
    pub fn time_zones(&self) -> Result<String, JsValue> {
        to_json(time::time_zones(), "time zones")
    }

    /// Format a JS timestamp (ms since the epoch) in an IANA zone; "Invalid timezone" for unknown names
    #[wasm_bindgen]
    pub fn format_in_zone(&self, epoch_ms: f64, zone: &str) -> Result<String, JsValue> {
        let instant = DateTime::<Utc>::from_timestamp_millis(epoch_ms as i64)
            .ok_or_else(|| JsValue::from_str(&format!("Timestamp out of range: {}", epoch_ms)))?;
        Ok(time::format_in_zone(instant, zone))
    }

    /// Returns JSON TimeReport for the custom date/time when both are set, otherwise for now.
    /// local_zone is the viewer's zone, used for the clock and to read the custom fields.
    #[wasm_bindgen]
    pub fn time_report(
        &self,
        custom_date: Option<String>,
        custom_time: Option<String>,
        local_zone: &str,
    ) -> Result<String, JsValue> {
        let instant = time::resolve_instant(
            custom_date.as_deref(),
            custom_time.as_deref(),
            local_zone,
            Utc::now(),
        )
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let report =
            time::report(instant, local_zone).map_err(|e| JsValue::from_str(&e.to_string()))?;
        to_json(&report, "time report")
    }

    /// Generate a password from JSON options; missing fields take defaults
    #[wasm_bindgen]
    pub fn generate_password(&self, options_json: &str) -> Result<String, JsValue> {
        let options: password::PasswordOptions = serde_json::from_str(options_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse options JSON: {}", e)))?;
        password::generate_default(&options).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Returns JSON {"score": 0-4, "label": "..."}
    #[wasm_bindgen]
    pub fn password_strength(&self, password: &str) -> Result<String, JsValue> {
        to_json(&password::strength(password), "strength")
    }

    /// Parse stored TOML preferences into JSON
    #[wasm_bindgen]
    pub fn parse_preferences(&self, toml_content: &str) -> Result<String, JsValue> {
        let prefs = Preferences::load_from_str(toml_content)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        to_json(&prefs, "preferences")
    }

    /// Serialize JSON preferences back to TOML for storage
    #[wasm_bindgen]
    pub fn serialize_preferences(&self, prefs_json: &str) -> Result<String, JsValue> {
        let prefs: Preferences = serde_json::from_str(prefs_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse preferences JSON: {}", e)))?;
        prefs
            .to_toml_string()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
