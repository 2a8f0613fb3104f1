use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount};

use crate::{
    errors::ErrorCode,
    state::{BridgeConfig, BurnRecord},
};

pub fn burn_wrapped(ctx: Context<BurnWrapped>, destination_address: [u8; 20]) -> Result<()> {
    let config = &mut ctx.accounts.config;

    require!(!config.paused, ErrorCode::BridgePaused);

    let cpi_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Burn {
            mint: ctx.accounts.mint.to_account_info(),
            from: ctx.accounts.token_account.to_account_info(),
            authority: ctx.accounts.owner.to_account_info(),
        },
    );
    token::burn(cpi_ctx, 1)?;

    let current_nonce = config.burn_cnt;
    let record = &mut ctx.accounts.burn_record;
    record.config = config.key();
    record.nonce = current_nonce;
    record.mint = ctx.accounts.mint.key();
    record.owner = ctx.accounts.owner.key();
    record.destination_address = destination_address;
    record.burned_at_slot = Clock::get()?.slot;

    config.burn_cnt = config
        .burn_cnt
        .checked_add(1)
        .ok_or_else(|| error!(ErrorCode::CounterOverflow))?;

    emit!(BridgeBurnEvent {
        nonce: current_nonce,
        mint: ctx.accounts.mint.key(),
        owner: ctx.accounts.owner.key(),
        destination_address,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct BurnWrapped<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(mut, seeds = [b"bridge"], bump)]
    pub config: Account<'info, BridgeConfig>,

    #[account(mut)]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = token_account.mint == mint.key(),
        constraint = token_account.owner == owner.key() @ErrorCode::Unauthorized
    )]
    pub token_account: Account<'info, TokenAccount>,

    // One record per burn, keyed by the global burn counter.
    #[account(
        init,
        payer = owner,
        space = 8 + BurnRecord::INIT_SPACE,
        seeds = [b"burn", config.key().as_ref(), &config.burn_cnt.to_le_bytes()],
        bump
    )]
    pub burn_record: Account<'info, BurnRecord>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

#[event]
pub struct BridgeBurnEvent {
    pub nonce: u64,
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub destination_address: [u8; 20],
}
