use serde::de::IgnoredAny;
use url::Url;

use super::{UnifonicClient, UnifonicError};
use crate::domain::{
    CallOptions, CallResult, CallsDetailsFilter, GetCallStatusResult, GetCallsDetailsResult,
    GetScheduledCallsResult, TtsCallOptions, TtsCallResult, TtsLanguage, VoiceInboxFilter,
    VoiceInboxResult,
};
use crate::transport;

impl UnifonicClient {
    /// Call `recipient` and play the audio file at `content`.
    pub async fn call(
        &self,
        recipient: &str,
        content: &Url,
        options: CallOptions,
    ) -> Result<CallResult, UnifonicError> {
        self.execute(transport::encode_call(recipient, content, &options)?)
            .await
    }

    pub async fn get_call_status(
        &self,
        call_id: &str,
    ) -> Result<GetCallStatusResult, UnifonicError> {
        self.execute(transport::encode_get_call_status(call_id)?)
            .await
    }

    pub async fn get_calls_details(
        &self,
        filter: CallsDetailsFilter,
    ) -> Result<GetCallsDetailsResult, UnifonicError> {
        self.execute(transport::encode_get_calls_details(&filter))
            .await
    }

    /// Call `recipient` and read `content` out loud in `language`.
    pub async fn tts_call(
        &self,
        recipient: &str,
        content: &str,
        language: TtsLanguage,
        options: TtsCallOptions,
    ) -> Result<TtsCallResult, UnifonicError> {
        self.execute(transport::encode_tts_call(
            recipient, content, language, &options,
        )?)
        .await
    }

    /// Calls received on `number`.
    pub async fn voice_inbox(
        &self,
        number: &str,
        filter: VoiceInboxFilter,
    ) -> Result<VoiceInboxResult, UnifonicError> {
        self.execute(transport::encode_voice_inbox(number, &filter)?)
            .await
    }

    pub async fn get_scheduled_calls(
        &self,
        call_id: Option<&str>,
    ) -> Result<GetScheduledCallsResult, UnifonicError> {
        self.execute(transport::encode_get_scheduled_calls(call_id))
            .await
    }

    pub async fn stop_scheduled_calls(&self, call_id: &str) -> Result<(), UnifonicError> {
        let _: IgnoredAny = self
            .execute(transport::encode_stop_scheduled_calls(call_id)?)
            .await?;
        Ok(())
    }
}
