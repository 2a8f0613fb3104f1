use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, Token, TokenAccount, Transfer},
};

use crate::errors::ErrorCode;

pub fn transfer_nft(ctx: Context<TransferNft>) -> Result<()> {
    let cpi_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.from_token_account.to_account_info(),
            to: ctx.accounts.to_token_account.to_account_info(),
            authority: ctx.accounts.sender.to_account_info(),
        },
    );

    token::transfer(cpi_ctx, 1)?;

    Ok(())
}

#[derive(Accounts)]
pub struct TransferNft<'info> {
    #[account(mut)]
    pub sender: Signer<'info>,

    /// CHECK: new owner of the token; only used to derive the destination ATA
    pub recipient: UncheckedAccount<'info>,

    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = from_token_account.mint == mint.key(),
        constraint = from_token_account.owner == sender.key() @ErrorCode::Unauthorized
    )]
    pub from_token_account: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = sender,
        associated_token::mint = mint,
        associated_token::authority = recipient
    )]
    pub to_token_account: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}
