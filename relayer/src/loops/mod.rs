pub mod evm_to_solana;
pub mod solana_to_evm;

pub use evm_to_solana::evm_to_solana_loop;
pub use solana_to_evm::solana_to_evm_loop;
