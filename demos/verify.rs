use std::io::{self, BufRead, Write};
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use unifonic::{Channel, UnifonicClientBuilder, VerificationCodeOptions};

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

    let client = UnifonicClientBuilder::from_env()?.build()?;
    let options = VerificationCodeOptions {
        channel: Some(Channel::TextMessage),
        expiry: Some(Duration::from_secs(10 * 60)),
        ..Default::default()
    };
    let sent = client
        .send_verification_code(&recipient, "Your code is {#}", options)
        .await?;
    println!("verify_id: {:?}, status: {:?}", sent.verify_id, sent.status);

    print!("pass code: ");
    io::stdout().flush()?;
    let mut pass_code = String::new();
    io::stdin().lock().read_line(&mut pass_code)?;

    let verified = client.verify_number(&recipient, pass_code.trim()).await?;
    println!("verify_status: {:?}", verified.verify_status);

    Ok(())
}
