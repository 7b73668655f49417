// Token Swap Program
//
// Constant product AMM (x * y = k). An AMM is a market with a fixed fee; each
// AMM hosts one pool per token pair.
//
// Instructions:
// - create_amm: Register a market and its fee
// - create_pool: Create the pool, liquidity mint and custody accounts for a pair
// - deposit_liquidity: Add tokens, receive liquidity tokens
// - swap_exact_tokens_for_tokens: Exchange an exact input for at least a minimum output
// - withdraw_liquidity: Burn liquidity tokens, receive tokens

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod math;
pub mod pda;
pub mod state;

use instructions::*;

declare_id!("9REFrpSamkX7NYhHVqoDV6ZW9pxRY5Bu5iP684pTPj2X");

#[program]
pub mod token_swap {
    use super::*;

    pub fn create_amm(ctx: Context<CreateAmm>, id: Pubkey, fee: u16) -> Result<()> {
        ctx.accounts.create_amm(id, fee)
    }

    pub fn create_pool(ctx: Context<CreatePool>) -> Result<()> {
        ctx.accounts.create_pool()
    }

    pub fn deposit_liquidity(
        ctx: Context<DepositLiquidity>,
        amount_a: u64,
        amount_b: u64,
    ) -> Result<()> {
        ctx.accounts.deposit_liquidity(amount_a, amount_b, &ctx.bumps)
    }

    pub fn swap_exact_tokens_for_tokens(
        ctx: Context<SwapExactTokensForTokens>,
        swap_a: bool,
        input_amount: u64,
        min_output_amount: u64,
    ) -> Result<()> {
        ctx.accounts.swap_exact_tokens_for_tokens(
            swap_a,
            input_amount,
            min_output_amount,
            &ctx.bumps,
        )
    }

    pub fn withdraw_liquidity(ctx: Context<WithdrawLiquidity>, amount: u64) -> Result<()> {
        ctx.accounts.withdraw_liquidity(amount, &ctx.bumps)
    }
}
