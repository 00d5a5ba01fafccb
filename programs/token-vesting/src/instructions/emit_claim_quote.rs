use anchor_lang::prelude::*;

use crate::constants::EMPLOYEE_SEED;
use crate::error::VestingError;
use crate::state::{EmployeeVesting, VestingAccount};
use crate::utils::vesting;

/// Read-only quote of the vested / withdrawn / claimable breakdown at
/// current chain time. A fully-drained schedule quotes zero rather than
/// erroring.
pub fn emit_claim_quote(ctx: Context<EmitClaimQuote>) -> Result<()> {
    let ev = &ctx.accounts.employee_vesting;
    let now = Clock::get()?.unix_timestamp;

    let vested = vesting::vested_amount(ev.start_ts, ev.end_ts, ev.total_amount, now)?;
    let claimable = vested
        .checked_sub(ev.total_withdrawn)
        .ok_or(VestingError::MathOverflow)?;

    emit!(ClaimQuote {
        vesting_account: ev.vesting_account,
        beneficiary: ev.beneficiary,
        now_ts: now,
        vested_amount: vested,
        total_withdrawn: ev.total_withdrawn,
        claimable,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitClaimQuote<'info> {
    #[account(
        seeds = [vesting_account.company_name.as_bytes()],
        bump = vesting_account.bump
    )]
    pub vesting_account: Account<'info, VestingAccount>,

    #[account(
        seeds = [
            EMPLOYEE_SEED,
            employee_vesting.beneficiary.as_ref(),
            vesting_account.key().as_ref(),
        ],
        bump = employee_vesting.bump,
        constraint = employee_vesting.vesting_account == vesting_account.key() @ VestingError::VestingAccountMismatch,
    )]
    pub employee_vesting: Account<'info, EmployeeVesting>,
}

#[event]
pub struct ClaimQuote {
    pub vesting_account: Pubkey,
    pub beneficiary: Pubkey,
    pub now_ts: i64,
    pub vested_amount: u64,
    pub total_withdrawn: u64,
    pub claimable: u64,
}
