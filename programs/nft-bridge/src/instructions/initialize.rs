use anchor_lang::prelude::*;

use crate::state::BridgeConfig;

pub fn initialize(ctx: Context<Initialize>, authority_key: [u8; 32]) -> Result<()> {
    let config = &mut ctx.accounts.config;

    config.admin = ctx.accounts.admin.key();
    config.authority_key = authority_key;
    config.action_cnt = 0;
    config.burn_cnt = 0;
    config.paused = false;

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = 8 + BridgeConfig::INIT_SPACE,
        seeds = [b"bridge"],
        bump
    )]
    pub config: Account<'info, BridgeConfig>,

    pub system_program: Program<'info, System>,
}
