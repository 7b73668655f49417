// Withdraw Liquidity Instruction
//
// Burns liquidity tokens and returns the proportional share of both custody
// balances. Payouts round down, so the pool keeps any remainder.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, events::*, helpers::*, math, state::*};

#[derive(Accounts)]
pub struct WithdrawLiquidity<'info> {
    #[account(
        seeds = [
            pool.amm.as_ref(),
            pool.mint_a.as_ref(),
            pool.mint_b.as_ref(),
        ],
        bump,
        has_one = amm,
        has_one = mint_a,
        has_one = mint_b,
        has_one = mint_liquidity,
    )]
    pub pool: Box<Account<'info, Pool>>,

    pub amm: Box<Account<'info, Amm>>,

    /// CHECK: PDA signer
    #[account(
        seeds = [
            amm.key().as_ref(),
            mint_a.key().as_ref(),
            mint_b.key().as_ref(),
            AUTHORITY_SEED,
        ],
        bump,
    )]
    pub pool_authority: UncheckedAccount<'info>,

    pub depositor: Signer<'info>,

    #[account(
        mut,
        seeds = [
            amm.key().as_ref(),
            mint_a.key().as_ref(),
            mint_b.key().as_ref(),
            LIQUIDITY_SEED,
        ],
        bump,
    )]
    pub mint_liquidity: Box<Account<'info, Mint>>,

    pub mint_a: Box<Account<'info, Mint>>,
    pub mint_b: Box<Account<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = mint_a,
        associated_token::authority = pool_authority,
    )]
    pub pool_account_a: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = mint_b,
        associated_token::authority = pool_authority,
    )]
    pub pool_account_b: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = mint_liquidity,
        associated_token::authority = depositor,
    )]
    pub depositor_account_liquidity: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = mint_a,
        associated_token::authority = depositor,
    )]
    pub depositor_account_a: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = mint_b,
        associated_token::authority = depositor,
    )]
    pub depositor_account_b: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> WithdrawLiquidity<'info> {
    pub fn withdraw_liquidity(&mut self, amount: u64, bumps: &WithdrawLiquidityBumps) -> Result<()> {
        let quote = math::quote_withdraw(
            amount,
            self.pool_account_a.amount,
            self.pool_account_b.amount,
            self.mint_liquidity.supply,
        )?;

        assert_sufficient_balance(self.depositor_account_liquidity.amount, amount)?;

        let token_program = self.token_program.to_account_info();

        // Burn first so the claim is gone before custody pays out
        burn_liquidity(
            amount,
            &token_program,
            &self.mint_liquidity.to_account_info(),
            &self.depositor_account_liquidity.to_account_info(),
            &self.depositor.to_account_info(),
        )?;

        let bump = [bumps.pool_authority];
        let signer = PoolSigner::new(
            &self.pool,
            &bump,
            token_program,
            self.pool_authority.to_account_info(),
        );
        signer.pay_out(
            quote.amount_a,
            &self.pool_account_a.to_account_info(),
            &self.depositor_account_a.to_account_info(),
        )?;
        signer.pay_out(
            quote.amount_b,
            &self.pool_account_b.to_account_info(),
            &self.depositor_account_b.to_account_info(),
        )?;

        msg!(
            "Withdrawn: {} liquidity -> {} A, {} B",
            amount,
            quote.amount_a,
            quote.amount_b
        );

        emit!(LiquidityWithdrawn {
            pool: self.pool.key(),
            depositor: self.depositor.key(),
            liquidity: amount,
            amount_a: quote.amount_a,
            amount_b: quote.amount_b,
        });

        Ok(())
    }
}
