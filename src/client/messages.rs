use serde::de::IgnoredAny;

use super::{UnifonicClient, UnifonicError};
use crate::domain::{
    GetScheduledMessagesResult, KeywordOptions, KeywordRule, MessagesDetailsFilter,
    MessagesInboxFilter, MessagesInboxResult, MessagesPricingCountry, MessagesReportFilter,
    SendBulkOptions, SendBulkSmsMessagesResult, SendSmsMessageResult, SendSmsOptions,
    SmsMessageStatusResult, SmsMessagesDetailsResult, SmsMessagesReportResult,
};
use crate::transport;

impl UnifonicClient {
    /// Send one text message.
    ///
    /// `recipient` is in international format without `+` or `00` (e.g. `962788888888`).
    pub async fn send_sms_message(
        &self,
        recipient: &str,
        body: &str,
        options: SendSmsOptions,
    ) -> Result<SendSmsMessageResult, UnifonicError> {
        self.execute(transport::encode_send_sms_message(recipient, body, &options)?)
            .await
    }

    /// Send the same text to a comma separated list of recipients.
    ///
    /// Use [`crate::Recipient::join`] to build the list from typed numbers.
    pub async fn send_bulk_sms_messages(
        &self,
        recipients: &str,
        body: &str,
        options: SendBulkOptions,
    ) -> Result<SendBulkSmsMessagesResult, UnifonicError> {
        self.execute(transport::encode_send_bulk_sms_messages(
            recipients, body, &options,
        )?)
        .await
    }

    pub async fn get_sms_message_status(
        &self,
        message_id: &str,
    ) -> Result<SmsMessageStatusResult, UnifonicError> {
        self.execute(transport::encode_get_sms_message_status(message_id)?)
            .await
    }

    /// Aggregated counters for the messages matching `filter`.
    pub async fn get_sms_messages_report(
        &self,
        filter: MessagesReportFilter,
    ) -> Result<SmsMessagesReportResult, UnifonicError> {
        self.execute(transport::encode_get_sms_messages_report(&filter))
            .await
    }

    pub async fn get_sms_messages_details(
        &self,
        filter: MessagesDetailsFilter,
    ) -> Result<SmsMessagesDetailsResult, UnifonicError> {
        self.execute(transport::encode_get_sms_messages_details(&filter))
            .await
    }

    /// Register an inbound keyword rule on a dedicated or shared number.
    pub async fn messages_keyword(
        &self,
        number: &str,
        keyword: &str,
        rule: KeywordRule,
        options: KeywordOptions,
    ) -> Result<(), UnifonicError> {
        let _: IgnoredAny = self
            .execute(transport::encode_messages_keyword(
                number, keyword, rule, &options,
            )?)
            .await?;
        Ok(())
    }

    /// Messages received on `number`.
    pub async fn messages_inbox(
        &self,
        number: &str,
        filter: MessagesInboxFilter,
    ) -> Result<MessagesInboxResult, UnifonicError> {
        self.execute(transport::encode_messages_inbox(number, &filter)?)
            .await
    }

    /// Outbound prices per country and operator, optionally for one country only.
    ///
    /// Malformed country entries in the response are skipped instead of failing the call.
    pub async fn messages_pricing(
        &self,
        country_code: Option<&str>,
    ) -> Result<Vec<MessagesPricingCountry>, UnifonicError> {
        let data: serde_json::Value = self
            .execute(transport::encode_messages_pricing(country_code))
            .await?;
        transport::decode_messages_pricing(data).map_err(|err| UnifonicError::Parse(Box::new(err)))
    }

    pub async fn get_scheduled_messages(
        &self,
        message_id: Option<&str>,
    ) -> Result<GetScheduledMessagesResult, UnifonicError> {
        self.execute(transport::encode_get_scheduled_messages(message_id))
            .await
    }

    pub async fn stop_scheduled_message(&self, message_id: &str) -> Result<(), UnifonicError> {
        let _: IgnoredAny = self
            .execute(transport::encode_stop_scheduled_message(message_id)?)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;
    use crate::client::tests::{FakeTransport, make_client};
    use crate::domain::{DlrStatus, Recipient, SmsMessageStatus, ValidationError};

    #[tokio::test]
    async fn send_sms_message_builds_two_params_and_decodes_result() {
        let transport = FakeTransport::ok(
            r#"{
                "MessageID": 3185,
                "Status": "Queued",
                "NumberOfUnits": "1",
                "Cost": 0.05,
                "CurrencyCode": "SAR",
                "Balance": "49.95",
                "TimeCreated": "2015-06-06 23:59:59"
            }"#,
        );
        let client = make_client(transport.clone());

        let result = client
            .send_sms_message("962788888888", "Test", SendSmsOptions::default())
            .await
            .unwrap();
        assert_eq!(result.message.message_id.as_deref(), Some("3185"));
        assert_eq!(result.message.status, Some(SmsMessageStatus::Queued));
        assert_eq!(result.number_of_units, 1);
        assert_eq!(result.cost, Decimal::new(5, 2));
        assert_eq!(result.balance, Decimal::new(4995, 2));

        let request = transport.last_request();
        assert_eq!(request.resource(), "Messages/Send");
        assert_eq!(
            request.params(),
            &[
                ("Recipient".to_owned(), "962788888888".to_owned()),
                ("Body".to_owned(), "Test".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn send_bulk_accepts_joined_recipients() {
        let transport = FakeTransport::ok(
            r#"{"Messages": [
                {"MessageID": "1", "Recipient": "962788888888", "Status": "Sent"},
                {"MessageID": "2", "Recipient": "962796666666", "Status": "Queued"}
            ], "NumberOfUnits": 2}"#,
        );
        let client = make_client(transport.clone());
        let recipients = Recipient::join(&[
            Recipient::new("962788888888").unwrap(),
            Recipient::new("962796666666").unwrap(),
        ]);

        let result = client
            .send_bulk_sms_messages(&recipients, "Hi", SendBulkOptions::default())
            .await
            .unwrap();
        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.messages[1].status, Some(SmsMessageStatus::Queued));
        assert_eq!(
            transport.last_request().get("Recipient"),
            Some("962788888888,962796666666")
        );
    }

    #[tokio::test]
    async fn messages_details_sends_every_filter() {
        let transport = FakeTransport::ok(
            r#"{"Messages": null, "CurrencyCode": "SAR", "TotalTextMessages": "0", "Page": 1}"#,
        );
        let client = make_client(transport.clone());
        let filter = MessagesDetailsFilter {
            message_id: Some("123".to_owned()),
            dlr: Some(DlrStatus::Delivered),
            limit: Some(500),
            sender_id: Some("unitTest".to_owned()),
            status: Some(SmsMessageStatus::Sent),
            country: Some("Jordan".to_owned()),
            date_from: NaiveDate::from_ymd_opt(2015, 6, 1),
            date_to: NaiveDate::from_ymd_opt(2015, 6, 6),
        };

        let result = client.get_sms_messages_details(filter).await.unwrap();
        assert_eq!(result.page, 1);

        let request = transport.last_request();
        assert_eq!(request.resource(), "Messages/GetMessagesDetails");
        assert_eq!(request.params().len(), 8);
        assert_eq!(request.get("Limit"), Some("500"));
        assert_eq!(request.get("DLR"), Some("Delivered"));
    }

    #[tokio::test]
    async fn pricing_is_reshaped_into_country_records() {
        let transport = FakeTransport::ok(
            r#"{"SA": {"STC": {"CountryCode": "966", "Cost": "0.05"}}, "XX": false}"#,
        );
        let client = make_client(transport.clone());

        let countries = client.messages_pricing(Some("SA")).await.unwrap();
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].country_name, "SA");
        let operator = &countries[0].operators[0];
        assert_eq!(operator.operator_name, "STC");
        assert_eq!(operator.cost, Decimal::new(5, 2));
        assert_eq!(operator.mcc, None);
        assert_eq!(transport.last_request().get("CountryCode"), Some("SA"));
    }

    #[tokio::test]
    async fn pricing_with_bad_cost_is_a_parse_error() {
        let client = make_client(FakeTransport::ok(r#"{"SA": {"STC": {"Cost": "n/a"}}}"#));
        let err = client.messages_pricing(None).await.unwrap_err();
        assert!(matches!(err, UnifonicError::Parse(_)));
    }

    #[tokio::test]
    async fn keyword_and_stop_return_unit() {
        let transport = FakeTransport::ok("null");
        let client = make_client(transport.clone());

        client
            .messages_keyword("12132944430", "Test", KeywordRule::Is, KeywordOptions::default())
            .await
            .unwrap();
        assert_eq!(transport.last_request().get("Rule"), Some("Is"));

        client.stop_scheduled_message("96").await.unwrap();
        assert_eq!(
            transport.last_request().resource(),
            "Messages/StopScheduled"
        );
    }

    #[tokio::test]
    async fn inbox_scheduled_and_status() {
        let transport = FakeTransport::ok(
            r#"{"NumberOfMessages": 1, "Messages": [{"MessageFrom": "966500000000", "Message": "Hi", "DateReceived": "2015-06-06 10:00:00"}],
                "TotalTextMessages": "1", "Status": "Sent", "DLR": "Delivered"}"#,
        );
        let client = make_client(transport.clone());

        let inbox = client
            .messages_inbox("1200000012", MessagesInboxFilter::default())
            .await
            .unwrap();
        assert_eq!(inbox.number_of_messages, 1);
        assert_eq!(inbox.messages[0].message.as_deref(), Some("Hi"));

        let scheduled = client.get_scheduled_messages(None).await.unwrap();
        assert_eq!(scheduled.total_text_messages, 1);
        assert!(transport.last_request().params().is_empty());

        let status = client.get_sms_message_status("3185").await.unwrap();
        assert_eq!(status.status, Some(SmsMessageStatus::Sent));
        assert_eq!(status.dlr.as_deref(), Some("Delivered"));

        let report = client
            .get_sms_messages_report(MessagesReportFilter::default())
            .await
            .unwrap();
        assert_eq!(report.total_text_messages, 1);
    }

    #[tokio::test]
    async fn missing_required_arguments_never_reach_transport() {
        let transport = FakeTransport::ok("{}");
        let client = make_client(transport.clone());

        let err = client
            .send_sms_message("962788888888", "", SendSmsOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            UnifonicError::Validation(ValidationError::Empty { field: "Body" })
        ));
        assert!(client
            .messages_inbox("", MessagesInboxFilter::default())
            .await
            .is_err());
        assert!(client.stop_scheduled_message("").await.is_err());
        assert_eq!(transport.calls(), 0);
    }
}
