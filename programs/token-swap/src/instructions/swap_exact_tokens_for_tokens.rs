// Swap Exact Tokens For Tokens Instruction
//
// Swaps an exact input amount using the constant product formula (x * y = k).
// Fee is deducted from the input before the output is computed and stays in
// the pool.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, events::*, helpers::*, math, state::*};

#[derive(Accounts)]
pub struct SwapExactTokensForTokens<'info> {
    pub amm: Box<Account<'info, Amm>>,

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
    )]
    pub pool: Box<Account<'info, Pool>>,

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

    pub trader: Signer<'info>,

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
        associated_token::mint = mint_a,
        associated_token::authority = trader,
    )]
    pub trader_account_a: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = mint_b,
        associated_token::authority = trader,
    )]
    pub trader_account_b: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> SwapExactTokensForTokens<'info> {
    pub fn swap_exact_tokens_for_tokens(
        &mut self,
        swap_a: bool,
        input_amount: u64,
        min_output_amount: u64,
        bumps: &SwapExactTokensForTokensBumps,
    ) -> Result<()> {
        let reserve_a = self.pool_account_a.amount;
        let reserve_b = self.pool_account_b.amount;

        let (reserve_in, reserve_out, trader_balance) = if swap_a {
            (reserve_a, reserve_b, self.trader_account_a.amount)
        } else {
            (reserve_b, reserve_a, self.trader_account_b.amount)
        };

        let quote = math::quote_swap(
            input_amount,
            reserve_in,
            reserve_out,
            self.amm.fee,
            min_output_amount,
        )?;

        assert_sufficient_balance(trader_balance, input_amount)?;

        let token_program = self.token_program.to_account_info();
        let trader = self.trader.to_account_info();
        let pool_account_a = self.pool_account_a.to_account_info();
        let pool_account_b = self.pool_account_b.to_account_info();
        let trader_account_a = self.trader_account_a.to_account_info();
        let trader_account_b = self.trader_account_b.to_account_info();

        let (trader_in, custody_in, custody_out, trader_out) = if swap_a {
            (&trader_account_a, &pool_account_a, &pool_account_b, &trader_account_b)
        } else {
            (&trader_account_b, &pool_account_b, &pool_account_a, &trader_account_a)
        };

        // Full input (fee included) goes into custody
        deposit_into_custody(input_amount, &token_program, trader_in, custody_in, &trader)?;

        let bump = [bumps.pool_authority];
        let signer = PoolSigner::new(
            &self.pool,
            &bump,
            token_program,
            self.pool_authority.to_account_info(),
        );
        signer.pay_out(quote.output, custody_out, trader_out)?;

        // Re-check k against the live custody balances
        self.pool_account_a.reload()?;
        self.pool_account_b.reload()?;
        math::check_invariant(
            reserve_a,
            reserve_b,
            self.pool_account_a.amount,
            self.pool_account_b.amount,
        )?;

        if swap_a {
            msg!("Swapped {} A -> {} B", input_amount, quote.output);
        } else {
            msg!("Swapped {} B -> {} A", input_amount, quote.output);
        }

        emit!(SwapExecuted {
            pool: self.pool.key(),
            trader: self.trader.key(),
            swap_a,
            input_amount,
            output_amount: quote.output,
            reserve_a: self.pool_account_a.amount,
            reserve_b: self.pool_account_b.amount,
        });

        Ok(())
    }
}
