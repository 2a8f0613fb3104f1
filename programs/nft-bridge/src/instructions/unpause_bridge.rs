use anchor_lang::prelude::*;

use crate::{errors::ErrorCode, state::BridgeConfig};

pub fn unpause_bridge(ctx: Context<UnpauseBridge>) -> Result<()> {
    let config = &mut ctx.accounts.config;

    require!(config.paused, ErrorCode::NotPaused);

    config.paused = false;

    Ok(())
}

#[derive(Accounts)]
pub struct UnpauseBridge<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [b"bridge"],
        bump,
        constraint = config.admin == admin.key() @ErrorCode::UnauthorizedAdmin
    )]
    pub config: Account<'info, BridgeConfig>,
}
