pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFp1J6");

#[program]
pub mod token_vesting {
    use super::*;

    /// Creates the per-company vesting account and its custodial
    /// treasury token account. Fails if the company name is already
    /// taken.
    pub fn create_vesting_account(
        ctx: Context<CreateVestingAccount>,
        company_name: String,
    ) -> Result<()> {
        instructions::create_vesting_account(ctx, company_name)
    }

    /// Creates a linear vesting schedule for one beneficiary under an
    /// existing vesting account. Owner-only.
    pub fn create_employee_vesting(
        ctx: Context<CreateEmployeeVesting>,
        start_ts: i64,
        end_ts: i64,
        total_amount: u64,
    ) -> Result<()> {
        instructions::create_employee_vesting(ctx, start_ts, end_ts, total_amount)
    }

    /// Transfers the full currently-claimable amount from the treasury
    /// to the beneficiary and records the withdrawal.
    pub fn claim_tokens(ctx: Context<ClaimTokens>) -> Result<()> {
        instructions::claim_tokens(ctx)
    }

    /// Moves tokens from the owner's token account into the treasury.
    pub fn fund_treasury(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
        instructions::fund_treasury(ctx, amount)
    }

    /// Emits a claimable-amount quote for one employee record without
    /// mutating anything.
    pub fn emit_claim_quote(ctx: Context<EmitClaimQuote>) -> Result<()> {
        instructions::emit_claim_quote(ctx)
    }
}
