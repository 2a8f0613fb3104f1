//! Outbound direction: burns of wrapped NFTs release the original asset on
//! the EVM side. Burn records are PDAs keyed by a dense counter, so the
//! relayer only has to track the last nonce it has forwarded.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};

use anchor_lang::AccountDeserialize;

use ethers::{
    abi::Abi,
    contract::Contract,
    core::types::Address as EvmAddress,
    middleware::SignerMiddleware,
    providers::{Http, Provider},
    signers::{LocalWallet, Signer},
};

use solana_client::rpc_client::RpcClient;
use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey};

use tracing::{info, warn};

use crate::abis::EVM_BRIDGE_ABI;
use nft_bridge::state::{BridgeConfig, BurnRecord};

pub async fn solana_to_evm_loop() -> Result<()> {
    let rpc_url = std::env::var("SOLANA_RPC_URL")?;
    let rpc = RpcClient::new_with_commitment(rpc_url, CommitmentConfig::confirmed());

    // TODO: persist the cursor (redis or a small db) so restarts do not
    // re-submit old burns; the EVM contract currently dedupes by nonce.
    let mut last_processed_nonce = 0u64;

    loop {
        if let Err(err) = process_new_burns(&rpc, &mut last_processed_nonce).await {
            warn!(%err, "burn relay pass failed");
        }
        tokio::time::sleep(Duration::from_secs(5)).await;
    }
}

async fn process_new_burns(rpc: &RpcClient, last_processed_nonce: &mut u64) -> Result<()> {
    let program_id = nft_bridge::ID;
    let (config_pubkey, _) = Pubkey::find_program_address(&[b"bridge"], &program_id);

    let config_account = rpc.get_account(&config_pubkey)?;
    let mut config_data: &[u8] = &config_account.data;
    let config = BridgeConfig::try_deserialize(&mut config_data)
        .map_err(|e| anyhow!("failed to deserialize BridgeConfig: {e}"))?;

    if config.burn_cnt == *last_processed_nonce {
        return Ok(());
    }

    info!(
        last = *last_processed_nonce,
        current = config.burn_cnt,
        "new burns to relay"
    );

    for nonce in *last_processed_nonce..config.burn_cnt {
        let seeds: &[&[u8]] = &[b"burn", config_pubkey.as_ref(), &nonce.to_le_bytes()];
        let (burn_pda, _) = Pubkey::find_program_address(seeds, &program_id);

        let burn_account = rpc.get_account(&burn_pda)?;
        let mut data: &[u8] = &burn_account.data;
        let record = BurnRecord::try_deserialize(&mut data)
            .map_err(|e| anyhow!("failed to deserialize BurnRecord: {e}"))?;

        match submit_release(&record).await {
            Ok(()) => {
                *last_processed_nonce = nonce + 1;
            }
            Err(err) => {
                warn!(nonce, %err, "release failed; retrying later");
                break;
            }
        }
    }

    Ok(())
}

async fn submit_release(record: &BurnRecord) -> Result<()> {
    let rpc_url = std::env::var("EVM_RPC_URL")?;
    let private_key = std::env::var("EVM_PRIVATE_KEY")?;
    let bridge_address: EvmAddress = std::env::var("EVM_BRIDGE_ADDRESS")?.parse()?;
    let chain_id: u64 = std::env::var("EVM_CHAIN_ID")?.parse()?;

    let provider = Provider::<Http>::try_from(rpc_url)?;
    let wallet: LocalWallet = private_key.parse()?;
    let wallet = wallet.with_chain_id(chain_id);

    let client = Arc::new(SignerMiddleware::new(provider, wallet));

    let abi: Abi = serde_json::from_str(EVM_BRIDGE_ABI)?;
    let bridge = Contract::new(bridge_address, abi, client);

    let tx = bridge.method::<_, ()>(
        "releaseFromSolana",
        (
            record.nonce,
            record.mint.to_bytes(),
            record.owner.to_bytes(),
            EvmAddress::from(record.destination_address),
        ),
    )?;

    let pending_tx = tx.send().await?;
    let receipt = pending_tx.await?;

    info!(nonce = record.nonce, ?receipt, "release confirmed");
    Ok(())
}
