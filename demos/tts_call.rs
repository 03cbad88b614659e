use std::io;

use tracing_subscriber::EnvFilter;
use unifonic::{TtsCallOptions, TtsLanguage, UnifonicClientBuilder, Voice};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let recipient = std::env::var("UNIFONIC_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "UNIFONIC_PHONE environment variable is required",
        )
    })?;
    let content = std::env::var("UNIFONIC_MESSAGE")
        .unwrap_or_else(|_| "Hello from the unifonic demo.".to_owned());

    let client = UnifonicClientBuilder::from_env()?.build()?;
    let options = TtsCallOptions {
        voice: Some(Voice::Female),
        ..Default::default()
    };

    let call = client
        .tts_call(&recipient, &content, TtsLanguage::English, options)
        .await?;
    println!(
        "call_id: {:?}, status: {:?}, cost: {}",
        call.call_id, call.call_status, call.cost
    );

    if let Some(call_id) = call.call_id.as_deref() {
        let status = client.get_call_status(call_id).await?;
        println!(
            "status: {:?}, duration: {:?}, price: {}",
            status.call_status, status.call_duration, status.price
        );
    }

    Ok(())
}
