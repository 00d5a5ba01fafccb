use anchor_lang::prelude::*;

/// Custom error codes for the token vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: vesting account owner signature required")]
    UnauthorizedOwner,

    #[msg("Beneficiary does not match the employee vesting record")]
    BeneficiaryMismatch,

    #[msg("Employee record does not belong to this vesting account")]
    VestingAccountMismatch,

    #[msg("Invalid token mint")]
    InvalidMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Company name must be between 1 and 32 bytes")]
    InvalidCompanyName,

    #[msg("End time must be after start time")]
    InvalidSchedule,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Nothing to claim at the current time")]
    NothingToClaim,

    #[msg("Insufficient treasury balance to cover the claim")]
    InsufficientTreasury,

    #[msg("Math overflow")]
    MathOverflow,
}
