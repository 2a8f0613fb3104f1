//! Inbound direction: EVM lock events become authorized mints on Solana.
//!
//! For every `LockedForSolana` event the relayer creates the action,
//! signs the canonical payload with the authority key, and submits one
//! transaction: `create_action`, the ed25519 proof, `bridge_mint`.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};

use anchor_lang::{InstructionData, ToAccountMetas};
use anchor_spl::associated_token::get_associated_token_address;

use ethers::{
    abi::Abi,
    contract::{Contract, EthEvent},
    core::types::{Address as EvmAddress, U64},
    providers::{Http, Middleware, Provider},
};

use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair, Signature, Signer},
    system_program, sysvar,
    transaction::Transaction,
};

use tracing::{info, warn};

use crate::abis::EVM_BRIDGE_ABI;
use crate::proof;
use nft_bridge::instructions::MintNftData;

#[derive(Debug, Clone, EthEvent)]
#[ethevent(name = "LockedForSolana")]
pub struct LockedForSolanaEvent {
    #[ethevent(indexed)]
    pub action_id: u64,
    pub token_name: String,
    pub token_symbol: String,
    pub token_uri: String,
    pub recipient: [u8; 32],
}

pub async fn evm_to_solana_loop() -> Result<()> {
    let evm_rpc_url = std::env::var("EVM_RPC_URL")?;
    let bridge_address: EvmAddress = std::env::var("EVM_BRIDGE_ADDRESS")?.parse()?;
    let provider = Arc::new(Provider::<Http>::try_from(evm_rpc_url)?);

    let abi: Abi = serde_json::from_str(EVM_BRIDGE_ABI)?;
    let contract = Contract::new(bridge_address, abi, provider.clone());

    let solana_rpc_url = std::env::var("SOLANA_RPC_URL")?;
    let rpc = Arc::new(RpcClient::new_with_commitment(
        solana_rpc_url,
        CommitmentConfig::confirmed(),
    ));

    let payer = Arc::new(
        read_keypair_file(std::env::var("RELAYER_KEYPAIR")?)
            .map_err(|e| anyhow!("failed to read relayer keypair: {e}"))?,
    );
    let authority = Arc::new(
        read_keypair_file(std::env::var("AUTHORITY_KEYPAIR")?)
            .map_err(|e| anyhow!("failed to read authority keypair: {e}"))?,
    );

    let mut last_block = provider.get_block_number().await?;

    loop {
        // Pin the upper bound before querying so blocks mined during the
        // query are picked up by the next window.
        let head = provider.get_block_number().await?;
        if let Some((from, to)) = scan_window(last_block, head) {
            let events = contract
                .event::<LockedForSolanaEvent>()
                .from_block(from)
                .to_block(to)
                .query()
                .await?;

            for ev in events {
                let rpc = Arc::clone(&rpc);
                let payer = Arc::clone(&payer);
                let authority = Arc::clone(&authority);
                let action_id = ev.action_id;
                // send_and_confirm blocks, so keep it off the async executor.
                let result = tokio::task::spawn_blocking(move || {
                    submit_bridge_mint(&rpc, &payer, &authority, &ev)
                })
                .await?;
                match result {
                    Ok(sig) => info!(action_id, %sig, "minted wrapped NFT"),
                    Err(err) => warn!(action_id, %err, "mint submission failed"),
                }
            }

            last_block = to + U64::one();
        }

        tokio::time::sleep(Duration::from_secs(5)).await;
    }
}

/// Inclusive block range for one poll, or `None` when no block past the
/// cursor exists yet. Successive windows tile the chain with no gaps.
fn scan_window(cursor: U64, head: U64) -> Option<(U64, U64)> {
    (head >= cursor).then_some((cursor, head))
}

fn submit_bridge_mint(
    rpc: &RpcClient,
    payer: &Keypair,
    authority: &Keypair,
    ev: &LockedForSolanaEvent,
) -> Result<Signature> {
    let program_id = nft_bridge::ID;
    let (config, _) = Pubkey::find_program_address(&[b"bridge"], &program_id);
    let (auth, _) = Pubkey::find_program_address(&[b"auth"], &program_id);
    let (action, _) = Pubkey::find_program_address(
        &[b"action", &ev.action_id.to_le_bytes()],
        &program_id,
    );
    let (consumed_action, _) = Pubkey::find_program_address(
        &[b"consumed", &ev.action_id.to_le_bytes()],
        &program_id,
    );

    let owner = Pubkey::new_from_array(ev.recipient);
    let mint = Keypair::new();
    let (nft_record, _) =
        Pubkey::find_program_address(&[b"nft", mint.pubkey().as_ref()], &program_id);

    let data = MintNftData {
        action_id: ev.action_id,
        token_name: ev.token_name.clone(),
        token_symbol: ev.token_symbol.clone(),
        token_uri: ev.token_uri.clone(),
        owner: ev.recipient,
    };

    let create_action_ix = Instruction {
        program_id,
        accounts: nft_bridge::accounts::CreateAction {
            user: payer.pubkey(),
            config,
            action,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: nft_bridge::instruction::CreateAction {
            action_id: ev.action_id,
        }
        .data(),
    };

    let proof_ix = proof::sign_mint_payload(authority, &data)?;

    let mint_ix = Instruction {
        program_id,
        accounts: nft_bridge::accounts::BridgeMint {
            payer: payer.pubkey(),
            config,
            authority: auth,
            mint: mint.pubkey(),
            owner,
            token_account: get_associated_token_address(&owner, &mint.pubkey()),
            action,
            consumed_action,
            nft_record,
            instructions_sysvar: sysvar::instructions::ID,
            system_program: system_program::ID,
            token_program: anchor_spl::token::ID,
            associated_token_program: anchor_spl::associated_token::ID,
            rent: sysvar::rent::ID,
        }
        .to_account_metas(None),
        data: nft_bridge::instruction::BridgeMint { data }.data(),
    };

    // The proof must sit directly before bridge_mint in the transaction.
    let blockhash = rpc.get_latest_blockhash()?;
    let tx = Transaction::new_signed_with_payer(
        &[create_action_ix, proof_ix, mint_ix],
        Some(&payer.pubkey()),
        &[payer, &mint],
        blockhash,
    );

    Ok(rpc.send_and_confirm_transaction(&tx)?)
}
