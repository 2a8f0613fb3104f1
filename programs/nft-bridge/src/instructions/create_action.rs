use anchor_lang::prelude::*;

use crate::{
    errors::ErrorCode,
    state::{Action, BridgeConfig},
};

pub fn create_action(ctx: Context<CreateAction>, action_id: u64) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let action = &mut ctx.accounts.action;

    action.action_id = action_id;
    action.creator = ctx.accounts.user.key();

    config.action_cnt = config
        .action_cnt
        .checked_add(1)
        .ok_or_else(|| error!(ErrorCode::CounterOverflow))?;

    Ok(())
}

#[derive(Accounts)]
#[instruction(action_id: u64)]
pub struct CreateAction<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(mut, seeds = [b"bridge"], bump)]
    pub config: Account<'info, BridgeConfig>,

    // A second create for the same id fails here: the PDA already exists.
    #[account(
        init,
        payer = user,
        space = 8 + Action::INIT_SPACE,
        seeds = [b"action".as_ref(), &action_id.to_le_bytes()],
        bump
    )]
    pub action: Account<'info, Action>,

    pub system_program: Program<'info, System>,
}
