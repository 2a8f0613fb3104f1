use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct BridgeConfig {
    pub admin: Pubkey,
    /// Ed25519 public key of the off-chain authority that signs mint actions.
    pub authority_key: [u8; 32],
    pub action_cnt: u64,
    pub burn_cnt: u64,
    pub paused: bool,
}

#[account]
#[derive(InitSpace)]
pub struct Action {
    pub action_id: u64,
    pub creator: Pubkey,
}

/// Existence + flag of this PDA is the replay guard for an action id.
#[account]
#[derive(InitSpace)]
pub struct ConsumedAction {
    pub consumed: bool,
}

#[account]
#[derive(InitSpace)]
pub struct NftRecord {
    pub mint: Pubkey,
    pub action_id: u64,
    #[max_len(32)]
    pub name: String,
    #[max_len(16)]
    pub symbol: String,
    #[max_len(200)]
    pub uri: String,
}

#[account]
#[derive(InitSpace)]
pub struct BurnRecord {
    pub config: Pubkey,
    pub nonce: u64,
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub destination_address: [u8; 20],
    pub burned_at_slot: u64,
}
