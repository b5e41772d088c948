//! Context-aware error suggestions.
//!
//! Complements the static suggestions in the `codes` module.

use serde_json::Value;

use super::codes::ErrorCode;

/// Generate a context-aware suggestion for an error.
pub fn suggest_for_error(code: ErrorCode, context: Option<&Value>) -> String {
    match code {
        ErrorCode::ConfigMissingRequired => suggest_config_missing_required(context),
        ErrorCode::NotFound => suggest_not_found(context),
        _ => code.suggestion().to_string(),
    }
}

fn suggest_config_missing_required(context: Option<&Value>) -> String {
    let key = context
        .and_then(|c| c.get("config_key"))
        .and_then(Value::as_str);

    match key {
        Some("google.api_key") => {
            "Set GOOGLE_API_KEY (or XRAY_API_KEY), or api_key under [google] in config.toml"
                .to_string()
        }
        Some("google.engine_id") => {
            "Set GOOGLE_CX (or XRAY_ENGINE_ID), or engine_id under [google] in config.toml"
                .to_string()
        }
        _ => ErrorCode::ConfigMissingRequired.suggestion().to_string(),
    }
}

fn suggest_not_found(context: Option<&Value>) -> String {
    match context.and_then(|c| c.get("index")).and_then(Value::as_u64) {
        Some(index) => format!(
            "No saved search at index {index}. Run `xray saved list` to reload the current indexes"
        ),
        None => ErrorCode::NotFound.suggestion().to_string(),
    }
}
