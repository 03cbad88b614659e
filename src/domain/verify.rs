use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::wire::Channel;
use crate::transport::lenient;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Result of `Verify/GetCode`.
pub struct SendVerificationCodeResult {
    #[serde(rename = "VerifyID", default, deserialize_with = "lenient::opt_text")]
    pub verify_id: Option<String>,
    #[serde(rename = "MessageID", default, deserialize_with = "lenient::opt_text")]
    pub message_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub number_of_units: u64,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub cost: Decimal,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub currency_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub balance: Decimal,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub recipient: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_date_time")]
    pub time_created: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Result of `Verify/VerifyNumber`.
pub struct VerifyNumberResult {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub recipient: Option<String>,
    /// `Authenticated` or `Unauthenticated`.
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub verify_status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// One verification attempt.
pub struct VerificationDetails {
    #[serde(rename = "VerifyID", default, deserialize_with = "lenient::opt_text")]
    pub verify_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub recipient: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub verify_status: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_wire")]
    pub channel: Option<Channel>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub expired: bool,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub reason: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_date_time")]
    pub date_created: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Result of `Verify/GetDetails`.
pub struct GetVerificationDetailsResult {
    #[serde(default, deserialize_with = "lenient::count")]
    pub number_of_messages: u64,
    #[serde(default, deserialize_with = "lenient::list")]
    pub verify: Vec<VerificationDetails>,
}
