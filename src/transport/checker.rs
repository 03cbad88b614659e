use crate::domain::{ApiRequest, ValidationError, ensure_present};

pub fn encode_number_insight(recipient: &str) -> Result<ApiRequest, ValidationError> {
    let recipient = ensure_present("Recipient", recipient)?;
    Ok(ApiRequest::post("Checker/NumberInsight").param("Recipient", recipient))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_insight_sends_recipient_only() {
        let request = encode_number_insight("962788888888").unwrap();
        assert_eq!(request.resource(), "Checker/NumberInsight");
        assert_eq!(
            request.params(),
            &[("Recipient".to_owned(), "962788888888".to_owned())]
        );
        assert_eq!(
            encode_number_insight(""),
            Err(ValidationError::Empty { field: "Recipient" })
        );
    }
}
