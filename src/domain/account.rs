use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::transport::lenient;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Result of `Account/GetBalance`.
pub struct GetBalanceResult {
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub balance: Decimal,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub currency_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_decimal")]
    pub shared_balance: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Result of `Account/AddSenderID`. New sender names must be approved before use.
pub struct AddSenderResult {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Result of `Account/GetSenderIDStatus`.
pub struct GetSenderStatusResult {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// One registered sender name, as listed by `Account/GetSenderIDs`.
pub struct Sender {
    #[serde(rename = "SenderID", default, deserialize_with = "lenient::opt_text")]
    pub sender_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_default: bool,
    #[serde(default, deserialize_with = "lenient::opt_date_time")]
    pub date_created: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Envelope of `Account/GetSenderIDs`; the client unwraps it into `Vec<Sender>`.
pub struct GetSendersResult {
    #[serde(default, deserialize_with = "lenient::list")]
    pub sender_names: Vec<Sender>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
/// Result of `Account/GetAppDefaultSenderID`.
pub struct GetAppDefaultSenderResult {
    #[serde(rename = "SenderID", default, deserialize_with = "lenient::opt_text")]
    pub sender_id: Option<String>,
}
