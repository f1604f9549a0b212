use anyhow::{Context, Result};
use vesting_core::{ClientConfig, Network, VestingAccountKey, VestingClient};
use vesting_solana::RpcLedger;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let seed = args
        .first()
        .context("usage: vesting-bin <seed> [--devnet]")?;
    let network = if args.iter().any(|arg| arg == "--devnet") {
        Network::Devnet
    } else {
        Network::Mainnet
    };

    let config = ClientConfig::new(network);
    let key = VestingAccountKey::derive(seed.as_bytes(), &config.program_id)?;
    println!("vesting account: {}", key.address);
    println!("bump: {}", key.bump);
    println!("contract id: {}", hex::encode(key.canonical_seed()));

    // Without an RPC endpoint this stays a pure offline derivation tool.
    let Ok(url) = std::env::var("VESTING_RPC_URL") else {
        return Ok(());
    };

    tracing::info!(%url, "fetching contract state");
    let client = VestingClient::new(RpcLedger::new(url), config);
    let info = client.contract_info(&key.address).await?;

    println!("destination: {}", info.destination_address);
    if let Some(mint) = info.mint_address {
        println!("mint: {mint}");
    }
    for schedule in &info.schedules {
        let release = chrono::DateTime::from_timestamp(schedule.release_time as i64, 0)
            .map(|date| date.to_rfc3339())
            .unwrap_or_else(|| schedule.release_time.to_string());
        println!("  {} -> {}", release, schedule.amount);
    }
    println!("total locked: {}", info.total_amount());

    Ok(())
}
