//! Reads back the ed25519-program instruction that precedes `bridge_mint`
//! in the transaction. The runtime has already verified the signature by the
//! time our instruction runs; what is checked here is that the verified
//! signer is the registered authority key and that the verified message is
//! the hash of the payload we were handed.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::{self, sysvar::instructions as sysvar_instructions};

use crate::errors::ErrorCode;

/// Instruction data layout of the ed25519 program:
/// count (1) + padding (1) + one 14-byte offsets block per signature,
/// followed by the referenced bytes. Offsets of `u16::MAX` refer to the
/// instruction the block itself lives in.
const OFFSETS_START: usize = 2;
const PUBKEY_OFFSET_POS: usize = OFFSETS_START + 4;
const MESSAGE_OFFSET_POS: usize = OFFSETS_START + 8;
const MESSAGE_SIZE_POS: usize = OFFSETS_START + 10;
const DATA_START: usize = OFFSETS_START + 14;

pub struct Ed25519Entry<'a> {
    pub signer: &'a [u8],
    pub message: &'a [u8],
}

/// Extracts the first (signer, message) pair from raw ed25519 instruction
/// data. Only self-referential entries are produced by our relayer, so the
/// instruction-index fields are not interpreted.
pub fn parse_entry(data: &[u8]) -> Result<Ed25519Entry<'_>> {
    if data.len() < DATA_START || data[0] < 1 {
        return err!(ErrorCode::InvalidEd25519Instruction);
    }

    let read_u16 = |pos: usize| -> Result<usize> {
        data.get(pos..pos + 2)
            .map(|b| u16::from_le_bytes([b[0], b[1]]) as usize)
            .ok_or_else(|| error!(ErrorCode::InvalidEd25519Instruction))
    };

    let pubkey_offset = read_u16(PUBKEY_OFFSET_POS)?;
    let message_offset = read_u16(MESSAGE_OFFSET_POS)?;
    let message_size = read_u16(MESSAGE_SIZE_POS)?;

    let signer = data
        .get(pubkey_offset..pubkey_offset + 32)
        .ok_or_else(|| error!(ErrorCode::InvalidEd25519Instruction))?;
    let message = data
        .get(message_offset..message_offset + message_size)
        .ok_or_else(|| error!(ErrorCode::InvalidEd25519Instruction))?;

    Ok(Ed25519Entry { signer, message })
}

/// Validates the proof for a borsh-encoded mint payload. The previous
/// instruction must target the ed25519 program, its signer must be
/// `authority_key`, and its message must equal the SHA-256 hash of
/// `payload`.
pub fn validate_mint_proof(
    instructions_sysvar: &AccountInfo,
    authority_key: &[u8; 32],
    payload: &[u8],
) -> Result<()> {
    let current_index = sysvar_instructions::load_current_index_checked(instructions_sysvar)?;
    if current_index == 0 {
        return err!(ErrorCode::InstructionAtWrongIndex);
    }

    let ed25519_ix = sysvar_instructions::load_instruction_at_checked(
        (current_index - 1) as usize,
        instructions_sysvar,
    )
    .map_err(|_| error!(ErrorCode::InvalidEd25519Instruction))?;

    if ed25519_ix.program_id != solana_program::ed25519_program::ID {
        return err!(ErrorCode::InvalidProgramId);
    }

    let entry = parse_entry(&ed25519_ix.data)?;
    if entry.signer != authority_key.as_slice() {
        return err!(ErrorCode::InvalidAuthorityKey);
    }

    let payload_hash = solana_program::hash::hash(payload);
    if entry.message != payload_hash.to_bytes() {
        return err!(ErrorCode::InvalidPayloadHash);
    }

    Ok(())
}

/// Builds the ed25519-program instruction carrying a detached proof, in the
/// exact layout `parse_entry` reads back. Client-side counterpart of the
/// on-chain validation; used by the relayer and the integration tests.
#[cfg(not(target_os = "solana"))]
pub fn proof_instruction(
    signer: &[u8; 32],
    signature: &[u8],
    message: &[u8],
) -> solana_program::instruction::Instruction {
    let pubkey_offset = DATA_START;
    let signature_offset = pubkey_offset + 32;
    let message_offset = signature_offset + signature.len();

    let mut data = Vec::with_capacity(message_offset + message.len());
    data.push(1); // num signatures
    data.push(0); // padding
    for part in [
        signature_offset as u16,
        u16::MAX, // signature_instruction_index: this instruction
        pubkey_offset as u16,
        u16::MAX, // public_key_instruction_index
        message_offset as u16,
        message.len() as u16,
        u16::MAX, // message_instruction_index
    ] {
        data.extend_from_slice(&part.to_le_bytes());
    }
    data.extend_from_slice(signer);
    data.extend_from_slice(signature);
    data.extend_from_slice(message);

    solana_program::instruction::Instruction {
        program_id: solana_program::ed25519_program::ID,
        accounts: vec![],
        data,
    }
}
