//! Transport layer: wire-format details (form encoding, envelope and payload decoding).

mod account;
mod checker;
mod envelope;
pub(crate) mod lenient;
mod messages;
mod pricing;
mod verify;
mod voice;

pub use account::{
    encode_add_sender, encode_change_app_default_sender, encode_delete_sender,
    encode_get_app_default_sender, encode_get_balance, encode_get_sender_status,
    encode_get_senders, unwrap_senders,
};
pub use checker::encode_number_insight;
pub use envelope::{Envelope, TransportError, decode_envelope};
pub use messages::{
    encode_get_scheduled_messages, encode_get_sms_message_status,
    encode_get_sms_messages_details, encode_get_sms_messages_report, encode_messages_inbox,
    encode_messages_keyword, encode_messages_pricing, encode_send_bulk_sms_messages,
    encode_send_sms_message, encode_stop_scheduled_message,
};
pub use pricing::decode_messages_pricing;
pub use verify::{
    encode_get_verification_details, encode_send_verification_code, encode_verify_number,
};
pub use voice::{
    encode_call, encode_get_call_status, encode_get_calls_details, encode_get_scheduled_calls,
    encode_stop_scheduled_calls, encode_tts_call, encode_voice_inbox,
};
