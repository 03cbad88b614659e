use tracing_subscriber::EnvFilter;
use unifonic::UnifonicClientBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let client = UnifonicClientBuilder::from_env()?.build()?;

    let balance = client.get_balance().await?;
    println!(
        "balance: {} {:?}, shared: {:?}",
        balance.balance, balance.currency_code, balance.shared_balance
    );

    let default_sender = client.get_app_default_sender().await?;
    println!("default sender: {:?}", default_sender.sender_id);

    for sender in client.get_senders().await? {
        println!(
            "sender: {:?}, status: {:?}, default: {}",
            sender.sender_id, sender.status, sender.is_default
        );
    }

    Ok(())
}
