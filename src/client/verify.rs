use super::{UnifonicClient, UnifonicError};
use crate::domain::{
    GetVerificationDetailsResult, SendVerificationCodeResult, VerificationCodeOptions,
    VerificationDetailsFilter, VerifyNumberResult,
};
use crate::transport;

impl UnifonicClient {
    /// Send a one time pass code to `recipient`.
    ///
    /// `body` must contain `{#}`, which Unifonic replaces with the generated code. With a
    /// voice channel (`Call` or `Both`) `options.language` and `options.ttl` are required.
    pub async fn send_verification_code(
        &self,
        recipient: &str,
        body: &str,
        options: VerificationCodeOptions,
    ) -> Result<SendVerificationCodeResult, UnifonicError> {
        self.execute(transport::encode_send_verification_code(
            recipient, body, &options,
        )?)
        .await
    }

    /// Check the pass code entered by the user.
    pub async fn verify_number(
        &self,
        recipient: &str,
        pass_code: &str,
    ) -> Result<VerifyNumberResult, UnifonicError> {
        self.execute(transport::encode_verify_number(recipient, pass_code)?)
            .await
    }

    pub async fn get_verification_details(
        &self,
        filter: VerificationDetailsFilter,
    ) -> Result<GetVerificationDetailsResult, UnifonicError> {
        self.execute(transport::encode_get_verification_details(&filter))
            .await
    }
}
