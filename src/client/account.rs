use serde::de::IgnoredAny;

use super::{UnifonicClient, UnifonicError};
use crate::domain::{
    AddSenderResult, GetAppDefaultSenderResult, GetBalanceResult, GetSenderStatusResult,
    GetSendersResult, Sender,
};
use crate::transport;

impl UnifonicClient {
    /// Current balance of the account.
    pub async fn get_balance(&self) -> Result<GetBalanceResult, UnifonicError> {
        self.execute(transport::encode_get_balance()).await
    }

    /// Request a new sender name. It becomes usable once approved.
    pub async fn add_sender(&self, sender_id: &str) -> Result<AddSenderResult, UnifonicError> {
        self.execute(transport::encode_add_sender(sender_id)?).await
    }

    pub async fn get_sender_status(
        &self,
        sender_id: &str,
    ) -> Result<GetSenderStatusResult, UnifonicError> {
        self.execute(transport::encode_get_sender_status(sender_id)?)
            .await
    }

    /// All sender names of the account.
    pub async fn get_senders(&self) -> Result<Vec<Sender>, UnifonicError> {
        let result: Option<GetSendersResult> =
            self.execute(transport::encode_get_senders()).await?;
        Ok(result.map(transport::unwrap_senders).unwrap_or_default())
    }

    pub async fn delete_sender(&self, sender_id: &str) -> Result<(), UnifonicError> {
        let _: IgnoredAny = self
            .execute(transport::encode_delete_sender(sender_id)?)
            .await?;
        Ok(())
    }

    pub async fn get_app_default_sender(
        &self,
    ) -> Result<GetAppDefaultSenderResult, UnifonicError> {
        self.execute(transport::encode_get_app_default_sender())
            .await
    }

    /// Make `sender_id` the default sender of the application.
    pub async fn change_app_default_sender(&self, sender_id: &str) -> Result<(), UnifonicError> {
        let _: IgnoredAny = self
            .execute(transport::encode_change_app_default_sender(sender_id)?)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::client::tests::{FakeTransport, make_client};
    use crate::client::UnifonicError;
    use crate::domain::{GetBalanceResult, ValidationError};

    #[tokio::test]
    async fn get_balance_decodes_envelope_data() {
        let transport = FakeTransport::ok(
            r#"{"Balance": "49.50", "CurrencyCode": "SAR", "SharedBalance": 0}"#,
        );
        let client = make_client(transport.clone());

        let balance = client.get_balance().await.unwrap();
        assert_eq!(balance.balance, Decimal::new(4950, 2));
        assert_eq!(balance.currency_code.as_deref(), Some("SAR"));
        assert_eq!(balance.shared_balance, Some(Decimal::ZERO));

        let request = transport.last_request();
        assert_eq!(request.resource(), "Account/GetBalance");
        assert!(request.params().is_empty());
    }

    #[tokio::test]
    async fn get_balance_without_data_is_default() {
        let client = make_client(FakeTransport::new(200, r#"{"success": true}"#));

        let balance = client.get_balance().await.unwrap();
        assert_eq!(balance, GetBalanceResult::default());
    }

    #[tokio::test]
    async fn add_sender_sends_exactly_sender_id() {
        let transport = FakeTransport::ok(r#"{"Status": "Pending"}"#);
        let client = make_client(transport.clone());

        let result = client.add_sender("test").await.unwrap();
        assert_eq!(result.status.as_deref(), Some("Pending"));

        let request = transport.last_request();
        assert_eq!(request.resource(), "Account/AddSenderID");
        assert_eq!(
            request.params(),
            &[("SenderID".to_owned(), "test".to_owned())]
        );
    }

    #[tokio::test]
    async fn get_senders_returns_unwrapped_list() {
        let transport = FakeTransport::ok(
            r#"{"SenderNames": [
                {"SenderID": "Unifonic", "Status": "Approved", "IsDefault": true},
                {"SenderID": "Shop", "Status": "Pending", "IsDefault": "false"}
            ]}"#,
        );
        let client = make_client(transport.clone());

        let senders = client.get_senders().await.unwrap();
        assert_eq!(senders.len(), 2);
        assert_eq!(senders[0].sender_id.as_deref(), Some("Unifonic"));
        assert!(senders[0].is_default);
        assert!(!senders[1].is_default);
        assert_eq!(transport.last_request().resource(), "Account/GetSenderIDs");
    }

    #[tokio::test]
    async fn get_senders_tolerates_missing_data() {
        let client = make_client(FakeTransport::ok("null"));
        assert!(client.get_senders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unit_operations_ignore_payload() {
        let transport = FakeTransport::ok(r#"{"anything": 1}"#);
        let client = make_client(transport.clone());

        client.delete_sender("old").await.unwrap();
        assert_eq!(transport.last_request().resource(), "Account/DeleteSenderID");

        client.change_app_default_sender("new").await.unwrap();
        let request = transport.last_request();
        assert_eq!(request.resource(), "Account/ChangeAppDefaultSenderID");
        assert_eq!(request.get("SenderID"), Some("new"));
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test]
    async fn default_sender_and_status() {
        let transport = FakeTransport::ok(r#"{"SenderID": "Unifonic", "Status": "Approved"}"#);
        let client = make_client(transport.clone());

        let default = client.get_app_default_sender().await.unwrap();
        assert_eq!(default.sender_id.as_deref(), Some("Unifonic"));

        let status = client.get_sender_status("Unifonic").await.unwrap();
        assert_eq!(status.status.as_deref(), Some("Approved"));
        assert_eq!(
            transport.last_request().resource(),
            "Account/GetSenderIDStatus"
        );
    }

    #[tokio::test]
    async fn missing_sender_id_never_reaches_transport() {
        let transport = FakeTransport::ok("{}");
        let client = make_client(transport.clone());

        for err in [
            client.add_sender("").await.unwrap_err(),
            client.get_sender_status("").await.unwrap_err(),
            client.delete_sender("").await.unwrap_err(),
            client.change_app_default_sender("").await.unwrap_err(),
        ] {
            assert!(matches!(
                err,
                UnifonicError::Validation(ValidationError::Empty { field: "SenderID" })
            ));
        }
        assert_eq!(transport.calls(), 0);

        client.delete_sender(" ").await.unwrap();
        assert_eq!(transport.last_request().get("SenderID"), Some(" "));
    }
}
