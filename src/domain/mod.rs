//! Domain layer: strong types, wire enums, request descriptors and result records (no I/O).

mod account;
mod checker;
mod messages;
mod request;
mod validation;
mod value;
mod verify;
mod voice;
pub(crate) mod wire;

pub use account::{
    AddSenderResult, GetAppDefaultSenderResult, GetBalanceResult, GetSenderStatusResult,
    GetSendersResult, Sender,
};
pub use checker::NumberInsightResult;
pub use messages::{
    BaseSmsMessage, GetScheduledMessagesResult, MessageInbox, MessagesInboxResult,
    MessagesPricingCountry, MessagesPricingOperator, ScheduledMessage, SendBulkSmsMessagesResult,
    SendSmsMessageResult, SmsMessageDetails, SmsMessageStatusResult, SmsMessagesDetailsResult,
    SmsMessagesReportResult,
};
pub use request::{
    ApiRequest, CallOptions, CallsDetailsFilter, HttpMethod, KeywordOptions,
    MessagesDetailsFilter, MessagesInboxFilter, MessagesReportFilter, SendBulkOptions,
    SendSmsOptions, TtsCallOptions, VerificationCodeOptions, VerificationDetailsFilter,
    VoiceInboxFilter,
};
pub use validation::{ValidationError, ensure_present, ensure_some};
pub use value::{AppSid, ErrorCode, Recipient};
pub use verify::{
    GetVerificationDetailsResult, SendVerificationCodeResult, VerificationDetails,
    VerifyNumberResult,
};
pub use voice::{
    CallDetails, CallResult, GetCallStatusResult, GetCallsDetailsResult, GetScheduledCallsResult,
    ScheduledCall, TtsCallResult, VoiceInbox, VoiceInboxResult,
};
pub use wire::{
    CallType, Channel, DlrStatus, KeywordRule, Repeat, RequestType, SendPriority, SendSmsType,
    SmsMessageStatus, TtsLanguage, VerificationSecurityType, Voice, VoiceCallStatus,
    MAX_DURATION, format_date, format_date_time, format_duration,
};
