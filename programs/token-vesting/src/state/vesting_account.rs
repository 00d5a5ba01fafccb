use anchor_lang::prelude::*;

use crate::constants::MAX_COMPANY_NAME_LEN;

/// Per-company vesting registry PDA, derived from the company name.
///
/// Holds the token-authority over its treasury, so claim transfers are
/// signed with this account's seeds.
#[account]
pub struct VestingAccount {
    /// Authority allowed to create employee schedules and fund the treasury.
    pub owner: Pubkey,
    /// Token mint this account vests.
    pub mint: Pubkey,
    /// Identity key; doubles as the PDA seed, so it is unique program-wide.
    pub company_name: String,
    /// Custodial treasury token account (token-authority = this PDA).
    pub treasury: Pubkey,
    /// Bump of the treasury token account PDA.
    pub treasury_bump: u8,
    /// Bump of this PDA.
    pub bump: u8,
}

impl VestingAccount {
    pub const SIZE: usize =
        32 + // owner
        32 + // mint
        4 + MAX_COMPANY_NAME_LEN + // company_name (borsh length prefix + max bytes)
        32 + // treasury
        1 +  // treasury_bump
        1;   // bump
}
