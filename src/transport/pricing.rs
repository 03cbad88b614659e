use serde_json::{Map, Value};

use super::envelope::TransportError;
use super::lenient::parse_decimal;
use crate::domain::{MessagesPricingCountry, MessagesPricingOperator};

/// Reshape the `Messages/Pricing` payload (`country -> operator -> attributes`) into records.
///
/// Entries that are not JSON objects are skipped; a `null` country yields no operators.
pub fn decode_messages_pricing(data: Value) -> Result<Vec<MessagesPricingCountry>, TransportError> {
    let countries = match data {
        Value::Null => return Ok(Vec::new()),
        Value::Object(countries) => countries,
        _ => {
            return Err(TransportError::UnexpectedShape {
                field: "data".to_owned(),
                expected: "object keyed by country",
            });
        }
    };

    let mut result = Vec::with_capacity(countries.len());
    for (country_name, operators) in countries {
        let operators = match operators {
            Value::Object(operators) => operators,
            Value::Null => Map::new(),
            other => {
                tracing::warn!(country = %country_name, kind = kind(&other), "skipping pricing entry");
                continue;
            }
        };

        let mut country = MessagesPricingCountry {
            country_name,
            operators: Vec::with_capacity(operators.len()),
        };
        for (operator_name, attributes) in operators {
            let Value::Object(attributes) = attributes else {
                tracing::warn!(
                    country = %country.country_name,
                    operator = %operator_name,
                    "skipping pricing operator entry"
                );
                continue;
            };
            country
                .operators
                .push(decode_operator(operator_name, &attributes)?);
        }
        result.push(country);
    }
    Ok(result)
}

fn decode_operator(
    operator_name: String,
    attributes: &Map<String, Value>,
) -> Result<MessagesPricingOperator, TransportError> {
    let cost = match text(attributes, "Cost") {
        None => Default::default(),
        Some(value) => parse_decimal(&value).ok_or(TransportError::InvalidDecimal {
            field: format!("{operator_name}.Cost"),
            value,
        })?,
    };

    Ok(MessagesPricingOperator {
        country_code: text(attributes, "CountryCode"),
        country_prefix: text(attributes, "CountryPrefix"),
        operator_prefix: text(attributes, "OperatorPrefix"),
        mcc: text(attributes, "MCC"),
        mnc: text(attributes, "MNC"),
        currency_code: text(attributes, "CurrencyCode"),
        cost,
        operator_name,
    })
}

fn text(attributes: &Map<String, Value>, key: &str) -> Option<String> {
    match attributes.get(key)? {
        Value::String(value) if !value.trim().is_empty() => Some(value.clone()),
        Value::Number(value) => Some(value.to_string()),
        _ => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
