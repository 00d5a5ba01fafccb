use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::TREASURY_SEED;
use crate::error::VestingError;
use crate::state::VestingAccount;

pub fn fund_treasury(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidAmount);

    let va = &ctx.accounts.vesting_account;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        va.owner,
        VestingError::UnauthorizedOwner
    );
    require_keys_eq!(
        ctx.accounts.owner_token_account.mint,
        va.mint,
        VestingError::InvalidMint
    );
    require_keys_eq!(
        ctx.accounts.owner_token_account.owner,
        ctx.accounts.owner.key(),
        VestingError::InvalidTokenAccount
    );

    // No funding cap: schedules may be over- or under-funded, and any
    // shortfall only surfaces when a claim is attempted.
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.owner_token_account.to_account_info(),
                to: ctx.accounts.treasury_token_account.to_account_info(),
                authority: ctx.accounts.owner.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.treasury_token_account.reload()?;

    emit!(TreasuryFunded {
        vesting_account: ctx.accounts.vesting_account.key(),
        amount,
        treasury_balance: ctx.accounts.treasury_token_account.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct FundTreasury<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [vesting_account.company_name.as_bytes()],
        bump = vesting_account.bump
    )]
    pub vesting_account: Account<'info, VestingAccount>,

    #[account(
        mut,
        seeds = [TREASURY_SEED, vesting_account.company_name.as_bytes()],
        bump = vesting_account.treasury_bump,
        constraint = treasury_token_account.mint == vesting_account.mint @ VestingError::InvalidMint,
    )]
    pub treasury_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TreasuryFunded {
    pub vesting_account: Pubkey,
    pub amount: u64,
    pub treasury_balance: u64,
}
