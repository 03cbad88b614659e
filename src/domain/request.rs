use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::wire::{
    CallType, Channel, DlrStatus, Repeat, RequestType, SendPriority, SendSmsType,
    SmsMessageStatus, TtsLanguage, VerificationSecurityType, Voice, VoiceCallStatus,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::AsRefStr, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
/// HTTP verb of an outgoing call. Every Unifonic operation is a `POST`.
pub enum HttpMethod {
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One outgoing call before transport: resource path, verb, and named form parameters.
///
/// Invariants: parameter names are unique and keep insertion order; optional parameters
/// are only present when the caller supplied a value.
pub struct ApiRequest {
    resource: &'static str,
    method: HttpMethod,
    params: Vec<(String, String)>,
}

impl ApiRequest {
    /// Start a `POST` descriptor for `resource` (e.g. `Messages/Send`).
    pub fn post(resource: &'static str) -> Self {
        Self {
            resource,
            method: HttpMethod::Post,
            params: Vec::new(),
        }
    }

    /// Set a parameter, replacing an earlier value with the same name.
    pub fn param(mut self, name: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.params.iter_mut().find(|(key, _)| key == name) {
            Some(slot) => slot.1 = value,
            None => self.params.push((name.to_owned(), value)),
        }
        self
    }

    /// Set a parameter only when `value` is present.
    pub fn param_opt<V: ToString>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(name, value.to_string()),
            None => self,
        }
    }

    /// Set a text parameter only when it is present and non-empty.
    pub fn text_opt(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.is_empty() => self.param(name, value),
            _ => self,
        }
    }

    pub fn resource(&self) -> &'static str {
        self.resource
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Look up a parameter value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, Default)]
/// Optional parameters of `Messages/Send`.
pub struct SendSmsOptions {
    pub sender_id: Option<String>,
    pub message_type: Option<SendSmsType>,
    pub priority: Option<SendPriority>,
    /// Past times are sent immediately by the provider.
    pub time_scheduled: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default)]
/// Optional parameters of `Messages/SendBulk`.
pub struct SendBulkOptions {
    pub sender_id: Option<String>,
    pub time_scheduled: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default)]
/// Filters of `Messages/GetMessagesReport`.
pub struct MessagesReportFilter {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub sender_id: Option<String>,
    pub status: Option<SmsMessageStatus>,
    pub dlr: Option<DlrStatus>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default)]
/// Filters of `Messages/GetMessagesDetails`.
pub struct MessagesDetailsFilter {
    pub message_id: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub sender_id: Option<String>,
    pub status: Option<SmsMessageStatus>,
    pub dlr: Option<DlrStatus>,
    pub country: Option<String>,
    /// Maximum 10,000; messages are sorted by send date.
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default)]
/// Optional parameters of `Messages/Keyword`.
pub struct KeywordOptions {
    pub sender_id: Option<String>,
    /// Auto reply sent back to the user.
    pub message: Option<String>,
    pub webhook_url: Option<String>,
    /// Query parameter of the webhook that receives the message text.
    pub message_parameter: Option<String>,
    /// Query parameter of the webhook that receives the sender number.
    pub recipient_parameter: Option<String>,
    pub request_type: Option<RequestType>,
    pub resource_number: Option<String>,
}

#[derive(Debug, Clone, Default)]
/// Filters of `Messages/Inbox`.
pub struct MessagesInboxFilter {
    pub keyword: Option<String>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
/// Optional parameters of `Voice/Call`.
pub struct CallOptions {
    pub call_type: Option<CallType>,
    pub caller_id: Option<String>,
    pub time_scheduled: Option<NaiveDateTime>,
    /// Pause in seconds at the start of the call.
    pub delay: Option<u8>,
    /// Only meaningful with [`CallType::Pull`].
    pub repeat: Option<Repeat>,
}

#[derive(Debug, Clone, Default)]
/// Filters of `Voice/GetCallsDetails`.
pub struct CallsDetailsFilter {
    pub call_id: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub status: Option<VoiceCallStatus>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default)]
/// Optional parameters of `Voice/TTSCall`.
pub struct TtsCallOptions {
    pub call_type: Option<CallType>,
    pub caller_id: Option<String>,
    pub time_scheduled: Option<NaiveDateTime>,
    pub voice: Option<Voice>,
    pub delay: Option<u8>,
    pub repeat: Option<Repeat>,
}

#[derive(Debug, Clone, Default)]
/// Filters of `Voice/Inbox`.
pub struct VoiceInboxFilter {
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
/// Optional parameters of `Verify/GetCode`.
///
/// When `channel` is set to anything but [`Channel::TextMessage`], `language` and `ttl`
/// become required.
pub struct VerificationCodeOptions {
    pub security_type: Option<VerificationSecurityType>,
    /// Pass code lifetime, sent as `hh:mm:ss`. The provider default is 24 hours.
    pub expiry: Option<Duration>,
    pub sender_id: Option<String>,
    pub channel: Option<Channel>,
    pub language: Option<TtsLanguage>,
    /// Minutes until the voice call is placed.
    pub ttl: Option<u32>,
}

#[derive(Debug, Clone, Default)]
/// Filters of `Verify/GetDetails`.
pub struct VerificationDetailsFilter {
    pub number: Option<String>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub verify_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_descriptor_starts_empty() {
        let request = ApiRequest::post("Account/GetBalance");
        assert_eq!(request.resource(), "Account/GetBalance");
        assert_eq!(request.method(), HttpMethod::Post);
        assert_eq!(request.method().as_ref(), "POST");
        assert!(request.params().is_empty());
    }

    #[test]
    fn param_names_stay_unique() {
        let request = ApiRequest::post("Messages/Send")
            .param("Recipient", "1")
            .param("Body", "x")
            .param("Recipient", "2");
        assert_eq!(
            request.params(),
            &[
                ("Recipient".to_owned(), "2".to_owned()),
                ("Body".to_owned(), "x".to_owned()),
            ]
        );
    }

    #[test]
    fn optional_params_are_skipped_when_absent() {
        let request = ApiRequest::post("Messages/Send")
            .param_opt::<u32>("Limit", None)
            .text_opt("SenderID", None)
            .text_opt("Country", Some(""))
            .param_opt("Type", Some(SendSmsType::Flash))
            .text_opt("Keyword", Some("Test"));
        assert_eq!(request.get("Limit"), None);
        assert_eq!(request.get("SenderID"), None);
        assert_eq!(request.get("Country"), None);
        assert_eq!(request.get("Type"), Some("Flash"));
        assert_eq!(request.get("Keyword"), Some("Test"));
        assert_eq!(request.params().len(), 2);
    }
}
