use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::wire::SmsMessageStatus;
use crate::transport::lenient;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
/// Fields shared by every record describing a single text message.
///
/// Embedded (flattened) into richer records such as [`SendSmsMessageResult`].
pub struct BaseSmsMessage {
    #[serde(rename = "MessageID", default, deserialize_with = "lenient::opt_text")]
    pub message_id: Option<String>,
    #[serde(rename = "Recipient", default, deserialize_with = "lenient::opt_text")]
    pub recipient: Option<String>,
    #[serde(rename = "Status", default, deserialize_with = "lenient::opt_wire")]
    pub status: Option<SmsMessageStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Result of `Messages/Send`.
pub struct SendSmsMessageResult {
    #[serde(flatten)]
    pub message: BaseSmsMessage,
    #[serde(default, deserialize_with = "lenient::count")]
    pub number_of_units: u64,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub cost: Decimal,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub currency_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub balance: Decimal,
    #[serde(default, deserialize_with = "lenient::opt_date_time")]
    pub time_created: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient::opt_date_time")]
    pub time_scheduled: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Result of `Messages/SendBulk`.
pub struct SendBulkSmsMessagesResult {
    #[serde(default, deserialize_with = "lenient::list")]
    pub messages: Vec<BaseSmsMessage>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub number_of_units: u64,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub cost: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub balance: Decimal,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub currency_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_date_time")]
    pub time_created: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient::opt_date_time")]
    pub time_scheduled: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
/// Result of `Messages/GetMessageIDStatus`.
pub struct SmsMessageStatusResult {
    #[serde(rename = "Status", default, deserialize_with = "lenient::opt_wire")]
    pub status: Option<SmsMessageStatus>,
    /// Carrier delivery receipt, kept as sent (`Delivered`, `Undeliverable`, ...).
    #[serde(rename = "DLR", default, deserialize_with = "lenient::opt_text")]
    pub dlr: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Result of `Messages/GetMessagesReport`.
pub struct SmsMessagesReportResult {
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_text_messages: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub number_of_units: u64,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub cost: Decimal,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub currency_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// One row of `Messages/GetMessagesDetails`.
pub struct SmsMessageDetails {
    #[serde(rename = "MessageID", default, deserialize_with = "lenient::opt_text")]
    pub message_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub message_body: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub recipient_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_wire")]
    pub status: Option<SmsMessageStatus>,
    #[serde(rename = "DLR", default, deserialize_with = "lenient::opt_text")]
    pub dlr: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_date_time")]
    pub date_created: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient::opt_date_time")]
    pub date_sent: Option<NaiveDateTime>,
    #[serde(rename = "SenderID", default, deserialize_with = "lenient::opt_text")]
    pub sender_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub number_of_units: u64,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub cost: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Result of `Messages/GetMessagesDetails` (latest 10,000 messages at most).
pub struct SmsMessagesDetailsResult {
    #[serde(default, deserialize_with = "lenient::list")]
    pub messages: Vec<SmsMessageDetails>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub currency_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_text_messages: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub page: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// One inbound message.
pub struct MessageInbox {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub message_from: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_date_time")]
    pub date_received: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Result of `Messages/Inbox`.
pub struct MessagesInboxResult {
    #[serde(default, deserialize_with = "lenient::count")]
    pub number_of_messages: u64,
    #[serde(default, deserialize_with = "lenient::list")]
    pub messages: Vec<MessageInbox>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Outbound pricing of one destination country, reshaped from `Messages/Pricing`.
pub struct MessagesPricingCountry {
    pub country_name: String,
    pub operators: Vec<MessagesPricingOperator>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Pricing of one mobile operator inside a [`MessagesPricingCountry`].
pub struct MessagesPricingOperator {
    pub operator_name: String,
    pub country_code: Option<String>,
    pub country_prefix: Option<String>,
    pub operator_prefix: Option<String>,
    pub mcc: Option<String>,
    pub mnc: Option<String>,
    /// Zero when the provider omits it.
    pub cost: Decimal,
    pub currency_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// A message waiting for its scheduled send time.
pub struct ScheduledMessage {
    #[serde(flatten)]
    pub message: BaseSmsMessage,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub message_body: Option<String>,
    #[serde(rename = "SenderID", default, deserialize_with = "lenient::opt_text")]
    pub sender_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_date_time")]
    pub time_scheduled: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Result of `Messages/GetScheduled`.
pub struct GetScheduledMessagesResult {
    #[serde(default, deserialize_with = "lenient::list")]
    pub messages: Vec<ScheduledMessage>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_text_messages: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub page: u64,
}
