use url::Url;

use crate::domain::{
    ApiRequest, CallOptions, CallsDetailsFilter, TtsCallOptions, TtsLanguage, ValidationError,
    VoiceInboxFilter, ensure_present, format_date, format_date_time,
};

/// `content` points at the audio file played to the recipient.
pub fn encode_call(
    recipient: &str,
    content: &Url,
    options: &CallOptions,
) -> Result<ApiRequest, ValidationError> {
    let recipient = ensure_present("Recipient", recipient)?;

    Ok(ApiRequest::post("Voice/Call")
        .param("Recipient", recipient)
        .param("Content", content.as_str())
        .param_opt("CallType", options.call_type)
        .text_opt("CallerID", options.caller_id.as_deref())
        .param_opt("TimeScheduled", options.time_scheduled.map(format_date_time))
        .param_opt("Delay", options.delay)
        .param_opt("Repeat", options.repeat))
}

pub fn encode_get_call_status(call_id: &str) -> Result<ApiRequest, ValidationError> {
    let call_id = ensure_present("CallID", call_id)?;
    Ok(ApiRequest::post("Voice/GetCallIDStatus").param("CallID", call_id))
}

pub fn encode_get_calls_details(filter: &CallsDetailsFilter) -> ApiRequest {
    ApiRequest::post("Voice/GetCallsDetails")
        .text_opt("CallID", filter.call_id.as_deref())
        .param_opt("DateFrom", filter.date_from.map(format_date))
        .param_opt("DateTo", filter.date_to.map(format_date))
        .param_opt("Status", filter.status)
        .text_opt("Country", filter.country.as_deref())
}

/// Text to speech call; `content` is the text read out in `language`.
pub fn encode_tts_call(
    recipient: &str,
    content: &str,
    language: TtsLanguage,
    options: &TtsCallOptions,
) -> Result<ApiRequest, ValidationError> {
    let recipient = ensure_present("Recipient", recipient)?;
    let content = ensure_present("Content", content)?;

    Ok(ApiRequest::post("Voice/TTSCall")
        .param("Recipient", recipient)
        .param("Content", content)
        .param("Language", language.as_ref())
        .param_opt("CallType", options.call_type)
        .text_opt("CallerID", options.caller_id.as_deref())
        .param_opt("TimeScheduled", options.time_scheduled.map(format_date_time))
        .param_opt("Voice", options.voice)
        .param_opt("Delay", options.delay)
        .param_opt("Repeat", options.repeat))
}

pub fn encode_voice_inbox(
    number: &str,
    filter: &VoiceInboxFilter,
) -> Result<ApiRequest, ValidationError> {
    let number = ensure_present("Number", number)?;

    Ok(ApiRequest::post("Voice/Inbox")
        .param("Number", number)
        .param_opt("FromDate", filter.from_date.map(format_date))
        .param_opt("ToDate", filter.to_date.map(format_date)))
}

pub fn encode_get_scheduled_calls(call_id: Option<&str>) -> ApiRequest {
    ApiRequest::post("Voice/GetScheduled").text_opt("CallID", call_id)
}

pub fn encode_stop_scheduled_calls(call_id: &str) -> Result<ApiRequest, ValidationError> {
    let call_id = ensure_present("CallID", call_id)?;
    Ok(ApiRequest::post("Voice/StopScheduled").param("CallID", call_id))
}
