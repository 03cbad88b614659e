use crate::domain::{
    ApiRequest, KeywordOptions, KeywordRule, MessagesDetailsFilter, MessagesInboxFilter,
    MessagesReportFilter, SendBulkOptions, SendSmsOptions, ValidationError, ensure_present,
    format_date, format_date_time,
};

pub fn encode_send_sms_message(
    recipient: &str,
    body: &str,
    options: &SendSmsOptions,
) -> Result<ApiRequest, ValidationError> {
    let recipient = ensure_present("Recipient", recipient)?;
    let body = ensure_present("Body", body)?;

    Ok(ApiRequest::post("Messages/Send")
        .param("Recipient", recipient)
        .param("Body", body)
        .text_opt("SenderID", options.sender_id.as_deref())
        .param_opt("TimeScheduled", options.time_scheduled.map(format_date_time))
        .param_opt("Type", options.message_type)
        .param_opt("Priority", options.priority))
}

/// `recipients` is a comma separated list (see [`crate::Recipient::join`]).
pub fn encode_send_bulk_sms_messages(
    recipients: &str,
    body: &str,
    options: &SendBulkOptions,
) -> Result<ApiRequest, ValidationError> {
    let recipients = ensure_present("Recipient", recipients)?;
    let body = ensure_present("Body", body)?;

    Ok(ApiRequest::post("Messages/SendBulk")
        .param("Recipient", recipients)
        .param("Body", body)
        .text_opt("SenderID", options.sender_id.as_deref())
        .param_opt("TimeScheduled", options.time_scheduled.map(format_date_time)))
}

pub fn encode_get_sms_message_status(message_id: &str) -> Result<ApiRequest, ValidationError> {
    let message_id = ensure_present("MessageID", message_id)?;
    Ok(ApiRequest::post("Messages/GetMessageIDStatus").param("MessageID", message_id))
}

pub fn encode_get_sms_messages_report(filter: &MessagesReportFilter) -> ApiRequest {
    ApiRequest::post("Messages/GetMessagesReport")
        .param_opt("DateFrom", filter.date_from.map(format_date))
        .param_opt("DateTo", filter.date_to.map(format_date))
        .text_opt("SenderID", filter.sender_id.as_deref())
        .param_opt("Status", filter.status)
        .param_opt("DLR", filter.dlr)
        .text_opt("Country", filter.country.as_deref())
}

pub fn encode_get_sms_messages_details(filter: &MessagesDetailsFilter) -> ApiRequest {
    ApiRequest::post("Messages/GetMessagesDetails")
        .text_opt("MessageID", filter.message_id.as_deref())
        .param_opt("DateFrom", filter.date_from.map(format_date))
        .param_opt("DateTo", filter.date_to.map(format_date))
        .text_opt("SenderID", filter.sender_id.as_deref())
        .param_opt("Status", filter.status)
        .param_opt("DLR", filter.dlr)
        .text_opt("Country", filter.country.as_deref())
        .param_opt("Limit", filter.limit)
}

pub fn encode_messages_keyword(
    number: &str,
    keyword: &str,
    rule: KeywordRule,
    options: &KeywordOptions,
) -> Result<ApiRequest, ValidationError> {
    let number = ensure_present("Number", number)?;
    let keyword = ensure_present("Keyword", keyword)?;

    Ok(ApiRequest::post("Messages/Keyword")
        .param("Number", number)
        .param("Keyword", keyword)
        .param("Rule", rule.as_ref())
        .text_opt("SenderID", options.sender_id.as_deref())
        .text_opt("Message", options.message.as_deref())
        .text_opt("WebhookURL", options.webhook_url.as_deref())
        .text_opt("MessageParameter", options.message_parameter.as_deref())
        .text_opt("RecipientParameter", options.recipient_parameter.as_deref())
        .param_opt("RequestType", options.request_type)
        .text_opt("ResourceNumber", options.resource_number.as_deref()))
}

pub fn encode_messages_inbox(
    number: &str,
    filter: &MessagesInboxFilter,
) -> Result<ApiRequest, ValidationError> {
    let number = ensure_present("Number", number)?;

    Ok(ApiRequest::post("Messages/Inbox")
        .param("Number", number)
        .text_opt("Keyword", filter.keyword.as_deref())
        .param_opt("FromDate", filter.from_date.map(format_date))
        .param_opt("ToDate", filter.to_date.map(format_date)))
}

/// `country_code` is a two letter code such as `SA`.
pub fn encode_messages_pricing(country_code: Option<&str>) -> ApiRequest {
    ApiRequest::post("Messages/Pricing").text_opt("CountryCode", country_code)
}

pub fn encode_get_scheduled_messages(message_id: Option<&str>) -> ApiRequest {
    ApiRequest::post("Messages/GetScheduled").text_opt("MessageID", message_id)
}

pub fn encode_stop_scheduled_message(message_id: &str) -> Result<ApiRequest, ValidationError> {
    let message_id = ensure_present("MessageID", message_id)?;
    Ok(ApiRequest::post("Messages/StopScheduled").param("MessageID", message_id))
}
