//! Signature authority: turns a mint payload into the ed25519 proof
//! instruction the on-chain program expects right before `bridge_mint`.

use anchor_lang::AnchorSerialize;
use anyhow::Result;
use solana_sdk::{
    hash,
    instruction::Instruction,
    signature::{Keypair, Signer},
};

use nft_bridge::ed25519::proof_instruction;
use nft_bridge::instructions::MintNftData;

/// Canonical message the authority signs: SHA-256 over the borsh payload.
pub fn payload_hash(data: &MintNftData) -> Result<[u8; 32]> {
    let payload = data.try_to_vec()?;
    Ok(hash::hash(&payload).to_bytes())
}

/// Signs the payload hash with the authority key and wraps signature, key
/// and message into an ed25519-program instruction.
pub fn sign_mint_payload(authority: &Keypair, data: &MintNftData) -> Result<Instruction> {
    let message = payload_hash(data)?;
    let signature = authority.sign_message(&message);
    Ok(proof_instruction(
        &authority.pubkey().to_bytes(),
        signature.as_ref(),
        &message,
    ))
}
