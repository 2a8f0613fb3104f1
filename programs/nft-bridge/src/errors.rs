use anchor_lang::error_code;

#[error_code]
pub enum ErrorCode {
    #[msg("Bridge is paused")]
    BridgePaused,

    #[msg("Bridge is not paused")]
    NotPaused,

    #[msg("Bridge is already paused")]
    AlreadyPaused,

    #[msg("Signer is not the bridge admin")]
    UnauthorizedAdmin,

    #[msg("Signer does not own this token account")]
    Unauthorized,

    #[msg("Token account owner does not match the payload owner")]
    InvalidOwner,

    #[msg("Action has already been consumed")]
    ActionAlreadyConsumed,

    #[msg("No verification instruction precedes this instruction")]
    InstructionAtWrongIndex,

    #[msg("Malformed ed25519 verification instruction")]
    InvalidEd25519Instruction,

    #[msg("Preceding instruction is not for the ed25519 program")]
    InvalidProgramId,

    #[msg("Proof signer is not the registered authority key")]
    InvalidAuthorityKey,

    #[msg("Proof message does not match the payload hash")]
    InvalidPayloadHash,

    #[msg("Counter overflow")]
    CounterOverflow,
}
