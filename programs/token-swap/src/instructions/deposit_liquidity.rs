// Deposit Liquidity Instruction
//
// Adds liquidity to a pool and mints liquidity tokens.
// First deposit: liquidity = sqrt(a * b)
// Subsequent: liquidity proportional to pool share, excess on one side stays
// with the depositor

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, events::*, helpers::*, math, state::*};

#[derive(Accounts)]
pub struct DepositLiquidity<'info> {
    #[account(
        seeds = [
            pool.amm.as_ref(),
            pool.mint_a.as_ref(),
            pool.mint_b.as_ref(),
        ],
        bump,
        has_one = mint_a,
        has_one = mint_b,
        has_one = mint_liquidity,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// CHECK: PDA signer
    #[account(
        seeds = [
            pool.amm.as_ref(),
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
            pool.amm.as_ref(),
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
        init_if_needed,
        payer = payer,
        associated_token::mint = mint_liquidity,
        associated_token::authority = depositor,
    )]
    pub depositor_account_liquidity: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = mint_a,
        associated_token::authority = depositor,
    )]
    pub depositor_account_a: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
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

impl<'info> DepositLiquidity<'info> {
    pub fn deposit_liquidity(
        &mut self,
        amount_a: u64,
        amount_b: u64,
        bumps: &DepositLiquidityBumps,
    ) -> Result<()> {
        // Reserves and supply are read live, never cached in the pool record
        let quote = math::quote_deposit(
            amount_a,
            amount_b,
            self.pool_account_a.amount,
            self.pool_account_b.amount,
            self.mint_liquidity.supply,
        )?;

        assert_sufficient_balance(self.depositor_account_a.amount, quote.amount_a)?;
        assert_sufficient_balance(self.depositor_account_b.amount, quote.amount_b)?;

        let token_program = self.token_program.to_account_info();
        let depositor = self.depositor.to_account_info();

        deposit_into_custody(
            quote.amount_a,
            &token_program,
            &self.depositor_account_a.to_account_info(),
            &self.pool_account_a.to_account_info(),
            &depositor,
        )?;
        deposit_into_custody(
            quote.amount_b,
            &token_program,
            &self.depositor_account_b.to_account_info(),
            &self.pool_account_b.to_account_info(),
            &depositor,
        )?;

        let bump = [bumps.pool_authority];
        let signer = PoolSigner::new(
            &self.pool,
            &bump,
            token_program,
            self.pool_authority.to_account_info(),
        );
        signer.mint_liquidity(
            quote.liquidity,
            &self.mint_liquidity.to_account_info(),
            &self.depositor_account_liquidity.to_account_info(),
        )?;

        msg!(
            "Deposited: {} A, {} B -> {} liquidity",
            quote.amount_a,
            quote.amount_b,
            quote.liquidity
        );

        emit!(LiquidityDeposited {
            pool: self.pool.key(),
            depositor: self.depositor.key(),
            amount_a: quote.amount_a,
            amount_b: quote.amount_b,
            liquidity: quote.liquidity,
        });

        Ok(())
    }
}
