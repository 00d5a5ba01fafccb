use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{MAX_COMPANY_NAME_LEN, TREASURY_SEED};
use crate::error::VestingError;
use crate::state::VestingAccount;

pub fn create_vesting_account(
    ctx: Context<CreateVestingAccount>,
    company_name: String,
) -> Result<()> {
    require!(
        !company_name.is_empty() && company_name.len() <= MAX_COMPANY_NAME_LEN,
        VestingError::InvalidCompanyName
    );

    let va = &mut ctx.accounts.vesting_account;
    va.owner = ctx.accounts.owner.key();
    va.mint = ctx.accounts.mint.key();
    va.company_name = company_name;
    va.treasury = ctx.accounts.treasury_token_account.key();
    va.treasury_bump = ctx.bumps.treasury_token_account;
    va.bump = ctx.bumps.vesting_account;

    msg!("Vesting account created for company: {}", va.company_name);

    emit!(VestingAccountCreated {
        vesting_account: va.key(),
        owner: va.owner,
        mint: va.mint,
        treasury: va.treasury,
        company_name: va.company_name.clone(),
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(company_name: String)]
pub struct CreateVestingAccount<'info> {
    #[account(mut)]
    pub fee_payer: Signer<'info>,

    /// Authority recorded on the new vesting account; must co-sign.
    pub owner: Signer<'info>,

    // A second creation under the same company name collides on this
    // derived address and the init fails, leaving the first record
    // untouched.
    #[account(
        init,
        payer = fee_payer,
        space = 8 + VestingAccount::SIZE,
        seeds = [company_name.as_bytes()],
        bump
    )]
    pub vesting_account: Account<'info, VestingAccount>,

    #[account(
        init,
        payer = fee_payer,
        token::mint = mint,
        token::authority = vesting_account,
        seeds = [TREASURY_SEED, company_name.as_bytes()],
        bump
    )]
    pub treasury_token_account: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct VestingAccountCreated {
    pub vesting_account: Pubkey,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub treasury: Pubkey,
    pub company_name: String,
}
