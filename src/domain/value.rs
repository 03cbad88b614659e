use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Unifonic application SID (`AppSid`), the account-level credential.
///
/// Invariant: non-empty after trimming. `Debug` never prints the secret.
pub struct AppSid(String);

impl AppSid {
    /// Form field name used by Unifonic (`AppSid`).
    pub const FIELD: &'static str = "AppSid";

    /// Create a validated [`AppSid`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated credential.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AppSid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AppSid(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Destination number in the provider's international format: digits only, no `+` or `00`.
///
/// Invariant: non-empty after trimming.
pub struct Recipient(String);

impl Recipient {
    /// Form field name used by Unifonic (`Recipient`).
    pub const FIELD: &'static str = "Recipient";

    /// Wrap an already formatted number (for example `962788888888`).
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Parse a local or E.164 number and normalize it to the provider format.
    ///
    /// `default_region` is used when the input has no explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, raw).map_err(|_| {
            ValidationError::InvalidPhoneNumber {
                input: raw.to_owned(),
            }
        })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();
        Ok(Self(e164.trim_start_matches('+').to_owned()))
    }

    /// Join recipients into the comma separated list accepted by `Messages/SendBulk`.
    pub fn join(recipients: &[Recipient]) -> String {
        recipients
            .iter()
            .map(Recipient::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Borrow the number as sent to Unifonic.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Recipient {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Error code reported in the provider envelope (`errorCode`, e.g. `ER-01`).
///
/// Preserved as-is even when unknown to this crate.
pub struct ErrorCode(String);

impl ErrorCode {
    /// Wrap a raw error code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Borrow the code as provided by Unifonic.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_sid_trims_and_hides_secret() {
        let sid = AppSid::new("  secret ").unwrap();
        assert_eq!(sid.as_str(), "secret");
        assert_eq!(format!("{sid:?}"), "AppSid(***)");
        assert!(AppSid::new("   ").is_err());
    }

    #[test]
    fn recipient_trims_and_rejects_empty() {
        let recipient = Recipient::new(" 962788888888 ").unwrap();
        assert_eq!(recipient.as_str(), "962788888888");
        assert_eq!(
            Recipient::new(""),
            Err(ValidationError::Empty {
                field: Recipient::FIELD
            })
        );
    }

    #[test]
    fn recipient_parse_strips_plus_from_e164() {
        let recipient = Recipient::parse(None, "+966 50 123 4567").unwrap();
        assert_eq!(recipient.as_str(), "966501234567");

        let local = Recipient::parse(Some(country::Id::SA), "0501234567").unwrap();
        assert_eq!(local.as_str(), "966501234567");
    }

    #[test]
    fn recipient_parse_rejects_garbage() {
        assert!(matches!(
            Recipient::parse(None, "not-a-number"),
            Err(ValidationError::InvalidPhoneNumber { .. })
        ));
    }

    #[test]
    fn recipient_join_uses_commas() {
        let list = vec![
            Recipient::new("962788888888").unwrap(),
            Recipient::new("962796666666").unwrap(),
        ];
        assert_eq!(Recipient::join(&list), "962788888888,962796666666");
        assert_eq!(Recipient::join(&[]), "");
    }
}
