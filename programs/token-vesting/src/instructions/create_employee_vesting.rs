use anchor_lang::prelude::*;

use crate::constants::EMPLOYEE_SEED;
use crate::error::VestingError;
use crate::state::{EmployeeVesting, VestingAccount};
use crate::utils::vesting;

pub fn create_employee_vesting(
    ctx: Context<CreateEmployeeVesting>,
    start_ts: i64,
    end_ts: i64,
    total_amount: u64,
) -> Result<()> {
    vesting::validate_schedule(start_ts, end_ts, total_amount)?;

    // No treasury-sufficiency check here: schedules may jointly exceed
    // current funding, and insufficiency surfaces at claim time.
    let ev = &mut ctx.accounts.employee_vesting;
    ev.beneficiary = ctx.accounts.beneficiary.key();
    ev.start_ts = start_ts;
    ev.end_ts = end_ts;
    ev.total_amount = total_amount;
    ev.total_withdrawn = 0;
    ev.vesting_account = ctx.accounts.vesting_account.key();
    ev.bump = ctx.bumps.employee_vesting;

    msg!(
        "Employee vesting created for beneficiary {} ({} tokens over {}..{})",
        ev.beneficiary,
        total_amount,
        start_ts,
        end_ts
    );

    emit!(EmployeeVestingCreated {
        vesting_account: ev.vesting_account,
        beneficiary: ev.beneficiary,
        start_ts,
        end_ts,
        total_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateEmployeeVesting<'info> {
    #[account(mut)]
    pub fee_payer: Signer<'info>,

    /// Must match the owner recorded on the vesting account.
    #[account(
        constraint = owner.key() == vesting_account.owner @ VestingError::UnauthorizedOwner
    )]
    pub owner: Signer<'info>,

    #[account(
        seeds = [vesting_account.company_name.as_bytes()],
        bump = vesting_account.bump
    )]
    pub vesting_account: Account<'info, VestingAccount>,

    // One record per (vesting account, beneficiary) pair; a duplicate
    // collides on the derived address and the init fails.
    #[account(
        init,
        payer = fee_payer,
        space = 8 + EmployeeVesting::SIZE,
        seeds = [
            EMPLOYEE_SEED,
            beneficiary.key().as_ref(),
            vesting_account.key().as_ref(),
        ],
        bump
    )]
    pub employee_vesting: Account<'info, EmployeeVesting>,

    /// CHECK: key only; recorded as the wallet entitled to claim.
    pub beneficiary: AccountInfo<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct EmployeeVestingCreated {
    pub vesting_account: Pubkey,
    pub beneficiary: Pubkey,
    pub start_ts: i64,
    pub end_ts: i64,
    pub total_amount: u64,
}
