use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::ErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response field `{field}` has unexpected shape: expected {expected}")]
    UnexpectedShape {
        field: String,
        expected: &'static str,
    },

    #[error("invalid decimal value in `{field}`: {value}")]
    InvalidDecimal { field: String, value: String },
}

#[derive(Debug, Clone, PartialEq)]
/// A decoded Unifonic response body.
pub enum Envelope<T> {
    /// `success` was true (or the body carried no envelope at all).
    Success(T),
    /// `success` was false.
    Failure {
        error_code: ErrorCode,
        message: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
struct JsonEnvelope {
    success: Value,
    #[serde(default)]
    message: Option<Value>,
    #[serde(rename = "errorCode", default)]
    error_code: Option<Value>,
    #[serde(default)]
    data: Value,
}

/// Decode a response body, unwrapping `data` from the `success` envelope.
pub fn decode_envelope<T>(body: &str) -> Result<Envelope<T>, TransportError>
where
    T: DeserializeOwned,
{
    let value: Value = serde_json::from_str(body)?;
    let has_envelope = value
        .as_object()
        .is_some_and(|object| object.contains_key("success"));
    if !has_envelope {
        return Ok(Envelope::Success(serde_json::from_value(value)?));
    }

    let envelope: JsonEnvelope = serde_json::from_value(value)?;
    if !is_success(&envelope.success)? {
        return Ok(Envelope::Failure {
            error_code: ErrorCode::new(text(envelope.error_code).unwrap_or_default()),
            message: text(envelope.message),
        });
    }

    if envelope.data.is_null() {
        // Records have no null form; an absent payload becomes their default.
        let payload = serde_json::from_value(Value::Null)
            .or_else(|_| serde_json::from_value(Value::Object(serde_json::Map::new())))?;
        return Ok(Envelope::Success(payload));
    }
    Ok(Envelope::Success(serde_json::from_value(envelope.data)?))
}

fn is_success(value: &Value) -> Result<bool, TransportError> {
    match value {
        Value::Bool(flag) => Ok(*flag),
        Value::String(text) if text.eq_ignore_ascii_case("true") => Ok(true),
        Value::String(text) if text.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(TransportError::UnexpectedShape {
            field: "success".to_owned(),
            expected: "boolean",
        }),
    }
}

fn text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(text) if !text.trim().is_empty() => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
