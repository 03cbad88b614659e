use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    Missing {
        field: &'static str,
        reason: &'static str,
    },
    InvalidPhoneNumber {
        input: String,
    },
    InvalidEndpoint {
        input: String,
    },
    InvalidSetting {
        name: &'static str,
        value: String,
    },
    DurationOutOfRange {
        field: &'static str,
        max_secs: u64,
        actual_secs: u64,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::Missing { field, reason } => write!(f, "{field} is required when {reason}"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidEndpoint { input } => write!(f, "invalid endpoint url: {input}"),
            Self::InvalidSetting { name, value } => write!(f, "invalid value for {name}: {value}"),
            Self::DurationOutOfRange {
                field,
                max_secs,
                actual_secs,
            } => write!(
                f,
                "{field} out of range: {actual_secs}s (max {max_secs}s)"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Reject a required argument that is empty.
///
/// Whitespace counts as content; the value is forwarded to the wire as given.
pub fn ensure_present<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(value)
}

/// Reject a conditionally required argument that was not supplied.
pub fn ensure_some<'a, T>(
    field: &'static str,
    reason: &'static str,
    value: &'a Option<T>,
) -> Result<&'a T, ValidationError> {
    value
        .as_ref()
        .ok_or(ValidationError::Missing { field, reason })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "Recipient" };
        assert_eq!(err.to_string(), "Recipient must not be empty");

        let err = ValidationError::Missing {
            field: "Language",
            reason: "Channel is not TextMessage",
        };
        assert_eq!(
            err.to_string(),
            "Language is required when Channel is not TextMessage"
        );

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");

        let err = ValidationError::InvalidEndpoint {
            input: "nope".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid endpoint url: nope");

        let err = ValidationError::DurationOutOfRange {
            field: "Expiry",
            max_secs: 359_999,
            actual_secs: 360_000,
        };
        assert_eq!(
            err.to_string(),
            "Expiry out of range: 360000s (max 359999s)"
        );
    }

    #[test]
    fn ensure_present_rejects_only_empty() {
        assert_eq!(
            ensure_present("Body", ""),
            Err(ValidationError::Empty { field: "Body" })
        );
        assert_eq!(ensure_present("Body", " "), Ok(" "));
        assert_eq!(ensure_present("Body", "  \t"), Ok("  \t"));
    }

    #[test]
    fn ensure_present_keeps_value_as_given() {
        assert_eq!(ensure_present("Body", " hi "), Ok(" hi "));
    }

    #[test]
    fn ensure_some_names_field_and_reason() {
        let ttl: Option<u32> = None;
        assert_eq!(
            ensure_some("TTL", "Channel is not TextMessage", &ttl),
            Err(ValidationError::Missing {
                field: "TTL",
                reason: "Channel is not TextMessage"
            })
        );
        assert_eq!(ensure_some("TTL", "x", &Some(5)), Ok(&5));
    }
}
