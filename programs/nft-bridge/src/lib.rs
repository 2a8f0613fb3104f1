use anchor_lang::prelude::*;

declare_id!("DdYBtCaH8mta3UnVkdCuNLwgVSRP7BUwrP4zpfxeMk23");

pub mod ed25519;
pub mod errors;
pub mod instructions;
pub mod state;

use instructions::*;

#[program]
pub mod nft_bridge {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, authority_key: [u8; 32]) -> Result<()> {
        instructions::initialize(ctx, authority_key)
    }

    pub fn create_action(ctx: Context<CreateAction>, action_id: u64) -> Result<()> {
        instructions::create_action(ctx, action_id)
    }

    pub fn bridge_mint(ctx: Context<BridgeMint>, data: MintNftData) -> Result<()> {
        instructions::bridge_mint(ctx, data)
    }

    pub fn transfer_nft(ctx: Context<TransferNft>) -> Result<()> {
        instructions::transfer_nft(ctx)
    }

    pub fn burn_wrapped(ctx: Context<BurnWrapped>, destination_address: [u8; 20]) -> Result<()> {
        instructions::burn_wrapped(ctx, destination_address)
    }

    pub fn pause_bridge(ctx: Context<PauseBridge>) -> Result<()> {
        instructions::pause_bridge(ctx)
    }

    pub fn unpause_bridge(ctx: Context<UnpauseBridge>) -> Result<()> {
        instructions::unpause_bridge(ctx)
    }
}
