use rust_decimal::Decimal;
use serde::Deserialize;

use crate::transport::lenient;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Result of `Checker/NumberInsight`: reachability, roaming and porting of a number.
pub struct NumberInsightResult {
    #[serde(rename = "InsightID", default, deserialize_with = "lenient::opt_text")]
    pub insight_id: Option<String>,
    /// `Reachable`, `Unreachable`, `No available data`, `Not supported destination` or
    /// `Wrong number format`.
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub subscriber_status: Option<String>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub cost: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub balance: Decimal,
    #[serde(rename = "MCC", default, deserialize_with = "lenient::opt_text")]
    pub mcc: Option<String>,
    #[serde(rename = "MNC", default, deserialize_with = "lenient::opt_text")]
    pub mnc: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub network: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_roaming: bool,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub roaming_country: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub roaming_network: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub ported: bool,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub ported_network: Option<String>,
}
