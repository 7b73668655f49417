// Events emitted after each successful state transition

use anchor_lang::prelude::*;

#[event]
pub struct AmmCreated {
    pub amm: Pubkey,
    pub id: Pubkey,
    pub admin: Pubkey,
    pub fee: u16,
}

#[event]
pub struct PoolCreated {
    pub amm: Pubkey,
    pub pool: Pubkey,
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
    pub mint_liquidity: Pubkey,
}

#[event]
pub struct LiquidityDeposited {
    pub pool: Pubkey,
    pub depositor: Pubkey,
    pub amount_a: u64,
    pub amount_b: u64,
    pub liquidity: u64,
}

#[event]
pub struct LiquidityWithdrawn {
    pub pool: Pubkey,
    pub depositor: Pubkey,
    pub liquidity: u64,
    pub amount_a: u64,
    pub amount_b: u64,
}

#[event]
pub struct SwapExecuted {
    pub pool: Pubkey,
    pub trader: Pubkey,
    pub swap_a: bool,
    pub input_amount: u64,
    pub output_amount: u64,
    pub reserve_a: u64,
    pub reserve_b: u64,
}
