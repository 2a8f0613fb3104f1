use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub mod abis;
pub mod loops;
pub mod proof;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    tracing::info!(program = %nft_bridge::ID, "relayer starting");

    tokio::try_join!(loops::evm_to_solana_loop(), loops::solana_to_evm_loop())?;

    Ok(())
}
