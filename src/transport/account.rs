use crate::domain::{ApiRequest, GetSendersResult, Sender, ValidationError, ensure_present};

const SENDER_ID: &str = "SenderID";

pub fn encode_get_balance() -> ApiRequest {
    ApiRequest::post("Account/GetBalance")
}

pub fn encode_add_sender(sender_id: &str) -> Result<ApiRequest, ValidationError> {
    sender_request("Account/AddSenderID", sender_id)
}

pub fn encode_get_sender_status(sender_id: &str) -> Result<ApiRequest, ValidationError> {
    sender_request("Account/GetSenderIDStatus", sender_id)
}

pub fn encode_get_senders() -> ApiRequest {
    ApiRequest::post("Account/GetSenderIDs")
}

pub fn encode_delete_sender(sender_id: &str) -> Result<ApiRequest, ValidationError> {
    sender_request("Account/DeleteSenderID", sender_id)
}

pub fn encode_get_app_default_sender() -> ApiRequest {
    ApiRequest::post("Account/GetAppDefaultSenderID")
}

pub fn encode_change_app_default_sender(sender_id: &str) -> Result<ApiRequest, ValidationError> {
    sender_request("Account/ChangeAppDefaultSenderID", sender_id)
}

/// `Account/GetSenderIDs` wraps the list in a `SenderNames` field.
pub fn unwrap_senders(result: GetSendersResult) -> Vec<Sender> {
    result.sender_names
}

fn sender_request(resource: &'static str, sender_id: &str) -> Result<ApiRequest, ValidationError> {
    let sender_id = ensure_present(SENDER_ID, sender_id)?;
    Ok(ApiRequest::post(resource).param(SENDER_ID, sender_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HttpMethod;

    fn assert_sender_only(request: &ApiRequest, resource: &str) {
        assert_eq!(request.resource(), resource);
        assert_eq!(request.method(), HttpMethod::Post);
        assert_eq!(
            request.params(),
            &[("SenderID".to_owned(), "test".to_owned())]
        );
    }

    #[test]
    fn parameterless_operations_send_no_params() {
        for (request, resource) in [
            (encode_get_balance(), "Account/GetBalance"),
            (encode_get_senders(), "Account/GetSenderIDs"),
            (encode_get_app_default_sender(), "Account/GetAppDefaultSenderID"),
        ] {
            assert_eq!(request.resource(), resource);
            assert_eq!(request.method(), HttpMethod::Post);
            assert!(request.params().is_empty());
        }
    }

    #[test]
    fn sender_operations_send_exactly_sender_id() {
        assert_sender_only(&encode_add_sender("test").unwrap(), "Account/AddSenderID");
        assert_sender_only(
            &encode_get_sender_status("test").unwrap(),
            "Account/GetSenderIDStatus",
        );
        assert_sender_only(
            &encode_delete_sender("test").unwrap(),
            "Account/DeleteSenderID",
        );
        assert_sender_only(
            &encode_change_app_default_sender("test").unwrap(),
            "Account/ChangeAppDefaultSenderID",
        );
    }

    #[test]
    fn sender_operations_require_sender_id() {
        let expected = Err(ValidationError::Empty { field: "SenderID" });
        assert_eq!(encode_add_sender(""), expected);
        assert_eq!(encode_get_sender_status(""), expected);
        assert_eq!(encode_delete_sender(""), expected);
        assert_eq!(encode_change_app_default_sender(""), expected);

        let request = encode_get_sender_status(" ").unwrap();
        assert_eq!(request.get("SenderID"), Some(" "));
    }

    #[test]
    fn unwrap_senders_returns_inner_list() {
        let result: GetSendersResult = serde_json::from_str(
            r#"{"SenderNames": [{"SenderID": "A"}, {"SenderID": "B"}]}"#,
        )
        .unwrap();
        let senders = unwrap_senders(result);
        assert_eq!(senders.len(), 2);
        assert_eq!(senders[1].sender_id.as_deref(), Some("B"));
    }
}
