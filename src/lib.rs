//! Typed Rust client for the Unifonic REST API.
//!
//! The crate is split into a domain layer of strong types and result records, a
//! transport layer for wire-format quirks (form parameters, the `success`/`data`
//! envelope, lenient scalars), and a small client layer orchestrating requests.
//!
//! ```rust,no_run
//! use unifonic::{AppSid, SendSmsOptions, UnifonicClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), unifonic::UnifonicError> {
//!     let client = UnifonicClient::new(AppSid::new("...")?);
//!     let sent = client
//!         .send_sms_message("962788888888", "hello", SendSmsOptions::default())
//!         .await?;
//!     println!("{:?}", sent.message.message_id);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BoxError, BoxFuture, HttpResponse, HttpTransport, UnifonicClient, UnifonicClientBuilder,
    UnifonicError,
};
pub use domain::{
    AddSenderResult, ApiRequest, AppSid, BaseSmsMessage, CallDetails, CallOptions, CallResult,
    CallType, CallsDetailsFilter, Channel, DlrStatus, ErrorCode, GetAppDefaultSenderResult,
    GetBalanceResult, GetCallStatusResult, GetCallsDetailsResult, GetScheduledCallsResult,
    GetScheduledMessagesResult, GetSenderStatusResult, GetVerificationDetailsResult, HttpMethod,
    KeywordOptions, KeywordRule, MessageInbox, MessagesDetailsFilter, MessagesInboxFilter,
    MessagesInboxResult, MessagesPricingCountry, MessagesPricingOperator, MessagesReportFilter,
    NumberInsightResult, Recipient, Repeat, RequestType, ScheduledCall, ScheduledMessage,
    SendBulkOptions, SendBulkSmsMessagesResult, SendPriority, SendSmsMessageResult,
    SendSmsOptions, SendSmsType, SendVerificationCodeResult, Sender, SmsMessageDetails,
    SmsMessageStatus, SmsMessageStatusResult, SmsMessagesDetailsResult, SmsMessagesReportResult,
    TtsCallOptions, TtsCallResult, TtsLanguage, ValidationError, VerificationCodeOptions,
    VerificationDetails, VerificationDetailsFilter, VerificationSecurityType, VerifyNumberResult,
    Voice, VoiceCallStatus, VoiceInbox, VoiceInboxFilter, VoiceInboxResult,
};
