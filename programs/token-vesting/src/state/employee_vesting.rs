use anchor_lang::prelude::*;

/// Per-(company, beneficiary) schedule PDA tracking entitlement and
/// cumulative withdrawals.
#[account]
pub struct EmployeeVesting {
    /// Employee wallet entitled to claim.
    pub beneficiary: Pubkey,
    /// Schedule start (Unix seconds).
    pub start_ts: i64,
    /// Schedule end (Unix seconds); always > start_ts.
    pub end_ts: i64,
    /// Total entitlement over the full schedule.
    pub total_amount: u64,
    /// Cumulative amount already claimed; never exceeds total_amount.
    pub total_withdrawn: u64,
    /// Owning vesting account PDA.
    pub vesting_account: Pubkey,
    /// Bump of this PDA.
    pub bump: u8,
}

impl EmployeeVesting {
    pub const SIZE: usize =
        32 + // beneficiary
        8 +  // start_ts
        8 +  // end_ts
        8 +  // total_amount
        8 +  // total_withdrawn
        32 + // vesting_account
        1;   // bump
}
