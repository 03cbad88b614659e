use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::wire::VoiceCallStatus;
use crate::transport::lenient;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Result of `Voice/Call`.
pub struct CallResult {
    #[serde(rename = "CallID", default, deserialize_with = "lenient::opt_text")]
    pub call_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_wire")]
    pub call_status: Option<VoiceCallStatus>,
    /// Answered duration in seconds.
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub call_duration: Option<u64>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub cost: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub balance: Decimal,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub recipient: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_date_time")]
    pub date_created: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient::opt_date_time")]
    pub time_scheduled: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Result of `Voice/GetCallIDStatus`.
///
/// Field names follow the wire: this endpoint reports `Price` where others say `Cost`.
pub struct GetCallStatusResult {
    #[serde(default, deserialize_with = "lenient::opt_wire")]
    pub call_status: Option<VoiceCallStatus>,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub call_duration: Option<u64>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub price: Decimal,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub recipient: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_date_time")]
    pub date_created: Option<NaiveDateTime>,
    /// When the call was picked up.
    #[serde(default, deserialize_with = "lenient::opt_date_time")]
    pub date_started: Option<NaiveDateTime>,
    /// When the call was hung up.
    #[serde(default, deserialize_with = "lenient::opt_date_time")]
    pub date_ended: Option<NaiveDateTime>,
    /// Keypad response of the recipient.
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub response: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// One row of `Voice/GetCallsDetails`.
pub struct CallDetails {
    #[serde(rename = "CallID", default, deserialize_with = "lenient::opt_text")]
    pub call_id: Option<String>,
    #[serde(rename = "AudioURL", default, deserialize_with = "lenient::opt_text")]
    pub audio_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub recipient_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_wire")]
    pub call_status: Option<VoiceCallStatus>,
    #[serde(default, deserialize_with = "lenient::opt_date_time")]
    pub time_created: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient::opt_date_time")]
    pub time_sent: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient::opt_date_time")]
    pub time_answered: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient::opt_date_time")]
    pub time_ended: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub call_duration: Option<u64>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub cost: Decimal,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub response: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Result of `Voice/GetCallsDetails` (latest 10,000 calls at most).
pub struct GetCallsDetailsResult {
    #[serde(default, deserialize_with = "lenient::list")]
    pub calls: Vec<CallDetails>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub currency_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_voice_messages: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub page: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Result of `Voice/TTSCall`.
pub struct TtsCallResult {
    #[serde(rename = "CallID", default, deserialize_with = "lenient::opt_text")]
    pub call_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_wire")]
    pub call_status: Option<VoiceCallStatus>,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub call_duration: Option<u64>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub cost: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub balance: Decimal,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub recipient: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_date_time")]
    pub date_created: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient::opt_date_time")]
    pub time_scheduled: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// One inbound call.
pub struct VoiceInbox {
    #[serde(rename = "CallID", default, deserialize_with = "lenient::opt_text")]
    pub call_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub recipient: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub audio_response: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub response: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_date_time")]
    pub date_received: Option<NaiveDateTime>,
    /// Reported as free text by the provider.
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub call_duration: Option<String>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub cost: Decimal,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub currency_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Result of `Voice/Inbox`.
pub struct VoiceInboxResult {
    #[serde(default, deserialize_with = "lenient::list")]
    pub total_calls: Vec<VoiceInbox>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// A call waiting for its scheduled time.
pub struct ScheduledCall {
    #[serde(rename = "CallID", default, deserialize_with = "lenient::opt_text")]
    pub call_id: Option<String>,
    /// Audio URL or text-to-speech content.
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub recipient: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_date_time")]
    pub time_scheduled: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient::opt_wire")]
    pub status: Option<VoiceCallStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Result of `Voice/GetScheduled`.
pub struct GetScheduledCallsResult {
    #[serde(default, deserialize_with = "lenient::list")]
    pub messages: Vec<ScheduledCall>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_voice_calls: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub page: u64,
}
