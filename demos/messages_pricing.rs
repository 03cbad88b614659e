use tracing_subscriber::EnvFilter;
use unifonic::UnifonicClientBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let country_code = std::env::var("UNIFONIC_COUNTRY_CODE").ok();

    let client = UnifonicClientBuilder::from_env()?.build()?;
    let countries = client.messages_pricing(country_code.as_deref()).await?;

    for country in countries {
        println!("{}", country.country_name);
        for operator in country.operators {
            println!(
                "  {}: {} {:?} (mcc {:?}, mnc {:?})",
                operator.operator_name,
                operator.cost,
                operator.currency_code,
                operator.mcc,
                operator.mnc
            );
        }
    }

    Ok(())
}
