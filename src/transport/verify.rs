use crate::domain::{
    ApiRequest, Channel, ValidationError, VerificationCodeOptions, VerificationDetailsFilter,
    MAX_DURATION, ensure_present, ensure_some, format_date, format_duration,
};

const VOICE_CHANNEL: &str = "Channel is not TextMessage";

/// `body` must contain the `{#}` placeholder that Unifonic replaces with the pass code.
pub fn encode_send_verification_code(
    recipient: &str,
    body: &str,
    options: &VerificationCodeOptions,
) -> Result<ApiRequest, ValidationError> {
    let recipient = ensure_present("Recipient", recipient)?;
    let body = ensure_present("Body", body)?;
    if options
        .channel
        .is_some_and(|channel| channel != Channel::TextMessage)
    {
        ensure_some("Language", VOICE_CHANNEL, &options.language)?;
        ensure_some("TTL", VOICE_CHANNEL, &options.ttl)?;
    }
    if let Some(expiry) = options
        .expiry
        .filter(|expiry| expiry.as_secs() > MAX_DURATION.as_secs())
    {
        return Err(ValidationError::DurationOutOfRange {
            field: "Expiry",
            max_secs: MAX_DURATION.as_secs(),
            actual_secs: expiry.as_secs(),
        });
    }

    Ok(ApiRequest::post("Verify/GetCode")
        .param("Recipient", recipient)
        .param("Body", body)
        .param_opt("SecurityType", options.security_type)
        .param_opt("Expiry", options.expiry.map(format_duration))
        .text_opt("SenderID", options.sender_id.as_deref())
        .param_opt("Channel", options.channel)
        .param_opt("Language", options.language)
        .param_opt("TTL", options.ttl))
}

pub fn encode_verify_number(
    recipient: &str,
    pass_code: &str,
) -> Result<ApiRequest, ValidationError> {
    let recipient = ensure_present("Recipient", recipient)?;
    let pass_code = ensure_present("PassCode", pass_code)?;

    Ok(ApiRequest::post("Verify/VerifyNumber")
        .param("Recipient", recipient)
        .param("PassCode", pass_code))
}

pub fn encode_get_verification_details(filter: &VerificationDetailsFilter) -> ApiRequest {
    ApiRequest::post("Verify/GetDetails")
        .text_opt("Number", filter.number.as_deref())
        .param_opt("FromDate", filter.from_date.map(format_date))
        .param_opt("ToDate", filter.to_date.map(format_date))
        .text_opt("VerifyID", filter.verify_id.as_deref())
}
