use super::{UnifonicClient, UnifonicError};
use crate::domain::NumberInsightResult;
use crate::transport;

impl UnifonicClient {
    /// Look up reachability, roaming and porting information for `recipient`.
    pub async fn number_insight(
        &self,
        recipient: &str,
    ) -> Result<NumberInsightResult, UnifonicError> {
        self.execute(transport::encode_number_insight(recipient)?)
            .await
    }
}
