use std::io;

use tracing_subscriber::EnvFilter;
use unifonic::{Recipient, SendSmsOptions, UnifonicClientBuilder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let phone_raw = std::env::var("UNIFONIC_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "UNIFONIC_PHONE environment variable is required (E.164, e.g. +962788888888)",
        )
    })?;
    let message = std::env::var("UNIFONIC_MESSAGE")
        .unwrap_or_else(|_| "Hello from the unifonic demo.".to_owned());
    let sender_id = std::env::var("UNIFONIC_SENDER_ID").ok();

    let client = UnifonicClientBuilder::from_env()?.build()?;
    let recipient = Recipient::parse(None, &phone_raw)?;
    let options = SendSmsOptions {
        sender_id,
        ..Default::default()
    };

    let sent = client
        .send_sms_message(recipient.as_str(), &message, options)
        .await?;
    println!(
        "message_id: {:?}, status: {:?}, cost: {} {:?}, balance: {}",
        sent.message.message_id, sent.message.status, sent.cost, sent.currency_code, sent.balance
    );

    if let Some(message_id) = sent.message.message_id.as_deref() {
        let status = client.get_sms_message_status(message_id).await?;
        println!("status: {:?}, dlr: {:?}", status.status, status.dlr);
    }

    Ok(())
}
