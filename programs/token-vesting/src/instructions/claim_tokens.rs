use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, Token, TokenAccount, Transfer},
};

use crate::constants::{EMPLOYEE_SEED, TREASURY_SEED};
use crate::error::VestingError;
use crate::state::{EmployeeVesting, VestingAccount};
use crate::utils::vesting;

pub fn claim_tokens(ctx: Context<ClaimTokens>) -> Result<()> {
    let vesting_account = &ctx.accounts.vesting_account;
    let ev = &mut ctx.accounts.employee_vesting;

    let now = Clock::get()?.unix_timestamp;
    let claimable = vesting::claimable_amount(
        ev.start_ts,
        ev.end_ts,
        ev.total_amount,
        ev.total_withdrawn,
        now,
    )?;
    require!(claimable > 0, VestingError::NothingToClaim);

    // Deferred-funding policy: sufficiency is only checked here, never
    // at schedule creation.
    require!(
        ctx.accounts.treasury_token_account.amount >= claimable,
        VestingError::InsufficientTreasury
    );

    // The vesting account PDA is the treasury's token authority.
    let signer_seeds: &[&[&[u8]]] = &[&[
        vesting_account.company_name.as_bytes(),
        &[vesting_account.bump],
    ]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.treasury_token_account.to_account_info(),
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: vesting_account.to_account_info(),
            },
            signer_seeds,
        ),
        claimable,
    )?;

    // The runtime's write lock on this account serializes claims, so
    // the read of total_withdrawn above and this write commit together.
    ev.total_withdrawn = ev
        .total_withdrawn
        .checked_add(claimable)
        .ok_or(VestingError::MathOverflow)?;

    msg!(
        "Claimed {} tokens for beneficiary {} (withdrawn {} of {})",
        claimable,
        ev.beneficiary,
        ev.total_withdrawn,
        ev.total_amount
    );

    emit!(TokensClaimed {
        vesting_account: ev.vesting_account,
        beneficiary: ev.beneficiary,
        amount: claimable,
        total_withdrawn: ev.total_withdrawn,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimTokens<'info> {
    #[account(mut)]
    pub fee_payer: Signer<'info>,

    /// The employee claiming; must match the record's beneficiary.
    #[account(
        constraint = beneficiary.key() == employee_vesting.beneficiary @ VestingError::BeneficiaryMismatch
    )]
    pub beneficiary: Signer<'info>,

    #[account(
        seeds = [vesting_account.company_name.as_bytes()],
        bump = vesting_account.bump
    )]
    pub vesting_account: Account<'info, VestingAccount>,

    #[account(
        mut,
        seeds = [
            EMPLOYEE_SEED,
            beneficiary.key().as_ref(),
            vesting_account.key().as_ref(),
        ],
        bump = employee_vesting.bump,
        constraint = employee_vesting.vesting_account == vesting_account.key() @ VestingError::VestingAccountMismatch,
    )]
    pub employee_vesting: Account<'info, EmployeeVesting>,

    #[account(
        mut,
        seeds = [TREASURY_SEED, vesting_account.company_name.as_bytes()],
        bump = vesting_account.treasury_bump,
        constraint = treasury_token_account.mint == vesting_account.mint @ VestingError::InvalidMint,
    )]
    pub treasury_token_account: Account<'info, TokenAccount>,

    // Created on first claim if the employee has no token account yet.
    #[account(
        init_if_needed,
        payer = fee_payer,
        associated_token::mint = mint,
        associated_token::authority = beneficiary,
    )]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    #[account(
        constraint = mint.key() == vesting_account.mint @ VestingError::InvalidMint
    )]
    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct TokensClaimed {
    pub vesting_account: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub total_withdrawn: u64,
}
