// Create Pool Instruction
//
// Opens a token pair under an existing AMM: pool record, liquidity mint and
// two custody accounts, all controlled by the pool authority PDA.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::*, events::*, state::*};

#[derive(Accounts)]
pub struct CreatePool<'info> {
    #[account(
        seeds = [amm.id.as_ref()],
        bump,
    )]
    pub amm: Box<Account<'info, Amm>>,

    // Pair checks sit on the first initialized account so a same-mint pair
    // fails before the second custody account collides with the first
    #[account(
        init,
        payer = payer,
        space = ANCHOR_DISCRIMINATOR + Pool::INIT_SPACE,
        seeds = [
            amm.key().as_ref(),
            mint_a.key().as_ref(),
            mint_b.key().as_ref(),
        ],
        bump,
        constraint = mint_a.key() != mint_b.key() @ AmmError::InvalidPair,
        constraint = mint_a.key() < mint_b.key() @ AmmError::UnorderedMints,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// CHECK: PDA signer for custody accounts and liquidity mint
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

    #[account(
        init,
        payer = payer,
        seeds = [
            amm.key().as_ref(),
            mint_a.key().as_ref(),
            mint_b.key().as_ref(),
            LIQUIDITY_SEED,
        ],
        bump,
        mint::decimals = LIQUIDITY_DECIMALS,
        mint::authority = pool_authority,
    )]
    pub mint_liquidity: Box<Account<'info, Mint>>,

    pub mint_a: Box<Account<'info, Mint>>,
    pub mint_b: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = payer,
        associated_token::mint = mint_a,
        associated_token::authority = pool_authority,
    )]
    pub pool_account_a: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = payer,
        associated_token::mint = mint_b,
        associated_token::authority = pool_authority,
    )]
    pub pool_account_b: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreatePool<'info> {
    pub fn create_pool(&mut self) -> Result<()> {
        self.pool.set_inner(Pool {
            amm: self.amm.key(),
            mint_a: self.mint_a.key(),
            mint_b: self.mint_b.key(),
            mint_liquidity: self.mint_liquidity.key(),
        });

        msg!(
            "Pool created: {} / {}",
            self.mint_a.key(),
            self.mint_b.key()
        );
        msg!("Pool address: {}", self.pool.key());

        emit!(PoolCreated {
            amm: self.amm.key(),
            pool: self.pool.key(),
            mint_a: self.mint_a.key(),
            mint_b: self.mint_b.key(),
            mint_liquidity: self.mint_liquidity.key(),
        });

        Ok(())
    }
}
