pub mod bridge_mint;
pub mod burn_wrapped;
pub mod create_action;
pub mod initialize;
pub mod pause_bridge;
pub mod transfer_nft;
pub mod unpause_bridge;

pub use bridge_mint::*;
pub use burn_wrapped::*;
pub use create_action::*;
pub use initialize::*;
pub use pause_bridge::*;
pub use transfer_nft::*;
pub use unpause_bridge::*;
