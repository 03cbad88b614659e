//! Closed sets of provider options and the scalar formats Unifonic expects on the wire.
//!
//! Every enum serializes to its variant name verbatim; the provider is case sensitive.

use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

/// `yyyy-MM-dd`
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// `yyyy-MM-dd HH:mm:ss`
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a day-granularity filter (`DateFrom`, `ToDate`, ...).
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Format a schedule timestamp (`TimeScheduled`).
pub fn format_date_time(value: NaiveDateTime) -> String {
    value.format(DATE_TIME_FORMAT).to_string()
}

/// Longest duration that fits `hh:mm:ss` with a two digit hour (`99:59:59`).
pub const MAX_DURATION: Duration = Duration::from_secs(99 * 3600 + 59 * 60 + 59);

/// Format a duration as `hh:mm:ss`.
///
/// Hours are total hours. Callers check against [`MAX_DURATION`] first; longer values would
/// need a third hour digit. Sub-second precision is dropped.
pub fn format_duration(value: Duration) -> String {
    let secs = value.as_secs();
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::AsRefStr, strum::Display)]
/// Message type (`Type`). Flash delivery is only supported for some destinations.
pub enum SendSmsType {
    Flash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::AsRefStr, strum::Display)]
/// Delivery priority (`Priority`).
pub enum SendPriority {
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::AsRefStr, strum::Display)]
/// Inbound keyword matching rule (`Rule`). Shared numbers only support `Is`.
pub enum KeywordRule {
    Is,
    StartsWith,
    Contains,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::AsRefStr, strum::Display)]
/// HTTP method used for keyword webhooks (`RequestType`).
pub enum RequestType {
    Post,
    Get,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, strum::AsRefStr, strum::Display,
)]
/// Send status of a text message.
pub enum SmsMessageStatus {
    Sent,
    Queued,
    Rejected,
    /// Available for advanced plans only.
    Failed,
    Scheduled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::AsRefStr, strum::Display)]
/// Delivery receipt status reported by carrier networks (`DLR`).
pub enum DlrStatus {
    Delivered,
    Undeliverable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::AsRefStr, strum::Display)]
/// Voice call type (`CallType`). `Pull` collects keypad responses.
pub enum CallType {
    Push,
    Pull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::AsRefStr, strum::Display)]
/// Whether a pull call is repeated (`Repeat`).
pub enum Repeat {
    On,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::AsRefStr, strum::Display)]
/// Text-to-speech voice gender (`Voice`).
pub enum Voice {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::AsRefStr, strum::Display)]
/// Text-to-speech language (`Language`).
pub enum TtsLanguage {
    Arabic,
    English,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, strum::AsRefStr, strum::Display,
)]
/// Voice call status as reported by Unifonic.
pub enum VoiceCallStatus {
    Queued,
    Completed,
    Terminated,
    Busy,
    NoAnswer,
    Rejected,
    Failed,
    Scheduled,
    Stopped,
    Sent,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, strum::AsRefStr, strum::Display,
)]
/// Verification delivery channel (`Channel`).
pub enum Channel {
    TextMessage,
    Call,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::AsRefStr, strum::Display)]
/// Pass code validity (`SecurityType`).
pub enum VerificationSecurityType {
    /// One time pass code.
    #[allow(clippy::upper_case_acronyms)]
    OTP,
}
