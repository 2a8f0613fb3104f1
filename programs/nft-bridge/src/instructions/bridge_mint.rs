use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, MintTo, Token, TokenAccount},
};

use crate::{
    ed25519,
    errors::ErrorCode,
    state::{Action, BridgeConfig, ConsumedAction, NftRecord},
};

/// Canonical signed payload. Borsh encoding of this struct, in this field
/// order, is what the authority hashes and signs; any reordering breaks the
/// proof.
#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct MintNftData {
    pub action_id: u64,
    pub token_name: String,
    pub token_symbol: String,
    pub token_uri: String,
    pub owner: [u8; 32],
}

pub fn bridge_mint(ctx: Context<BridgeMint>, data: MintNftData) -> Result<()> {
    let config = &ctx.accounts.config;

    require!(!config.paused, ErrorCode::BridgePaused);
    require!(
        ctx.accounts.owner.key() == Pubkey::new_from_array(data.owner),
        ErrorCode::InvalidOwner
    );

    // Consumption check and flip. The flip is atomic with respect to a
    // concurrent submission of the same action id: both transactions write
    // lock the same PDA, so the runtime serializes them and the loser sees
    // `consumed == true`. A failure later in this instruction unwinds the
    // flip together with everything else in the transaction.
    let consumed_action = &mut ctx.accounts.consumed_action;
    require!(!consumed_action.consumed, ErrorCode::ActionAlreadyConsumed);
    consumed_action.consumed = true;

    ed25519::validate_mint_proof(
        &ctx.accounts.instructions_sysvar.to_account_info(),
        &config.authority_key,
        &data.try_to_vec()?,
    )?;

    let auth_seeds: &[&[u8]] = &[b"auth", &[ctx.bumps.authority]];
    let signer_seeds = &[auth_seeds];

    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        MintTo {
            mint: ctx.accounts.mint.to_account_info(),
            to: ctx.accounts.token_account.to_account_info(),
            authority: ctx.accounts.authority.to_account_info(),
        },
        signer_seeds,
    );
    token::mint_to(cpi_ctx, 1)?;

    let record = &mut ctx.accounts.nft_record;
    record.mint = ctx.accounts.mint.key();
    record.action_id = data.action_id;
    record.name = data.token_name.clone();
    record.symbol = data.token_symbol.clone();
    record.uri = data.token_uri.clone();

    emit!(BridgeMintEvent {
        action_id: data.action_id,
        mint: ctx.accounts.mint.key(),
        owner: ctx.accounts.owner.key(),
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(data: MintNftData)]
pub struct BridgeMint<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(seeds = [b"bridge"], bump)]
    pub config: Account<'info, BridgeConfig>,

    /// CHECK: PDA mint authority; only ever signs CPIs
    #[account(seeds = [b"auth"], bump)]
    pub authority: UncheckedAccount<'info>,

    #[account(
        init,
        payer = payer,
        mint::decimals = 0,
        mint::authority = authority,
        mint::freeze_authority = authority
    )]
    pub mint: Account<'info, Mint>,

    /// CHECK: validated against the owner field of the signed payload
    pub owner: UncheckedAccount<'info>,

    #[account(
        init,
        payer = payer,
        associated_token::mint = mint,
        associated_token::authority = owner
    )]
    pub token_account: Account<'info, TokenAccount>,

    // Absence of this PDA means the action was never created. The seeds
    // also pin the account to the payload's action id.
    #[account(seeds = [b"action", &data.action_id.to_le_bytes()], bump)]
    pub action: Account<'info, Action>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + ConsumedAction::INIT_SPACE,
        seeds = [b"consumed", &data.action_id.to_le_bytes()],
        bump
    )]
    pub consumed_action: Account<'info, ConsumedAction>,

    #[account(
        init,
        payer = payer,
        space = 8 + NftRecord::INIT_SPACE,
        seeds = [b"nft", mint.key().as_ref()],
        bump
    )]
    pub nft_record: Account<'info, NftRecord>,

    /// CHECK: pinned to the instructions sysvar by the address constraint
    #[account(address = sysvar::instructions::ID)]
    pub instructions_sysvar: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct BridgeMintEvent {
    pub action_id: u64,
    pub mint: Pubkey,
    pub owner: Pubkey,
}

#[cfg(test)]
mod tests {
    use super::*;

    // The wire format the authority signs over: action id as u64 LE, then
    // length-prefixed UTF-8 strings, then the raw owner key.
    #[test]
    fn payload_encoding_is_canonical() {
        let data = MintNftData {
            action_id: 42,
            token_name: "Test".into(),
            token_symbol: "wNFT".into(),
            token_uri: "https://example.com/42".into(),
            owner: [5u8; 32],
        };

        let bytes = data.try_to_vec().unwrap();
        assert_eq!(&bytes[..8], &42u64.to_le_bytes());
        assert_eq!(&bytes[8..12], &4u32.to_le_bytes());
        assert_eq!(&bytes[12..16], b"Test");
        let len = bytes.len();
        assert_eq!(&bytes[len - 32..], &[5u8; 32]);
    }
}
