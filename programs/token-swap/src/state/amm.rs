// AMM Registry State

use anchor_lang::prelude::*;
use crate::{constants::*, errors::*};

// One configured market. Hosts any number of pools, all charging the same fee.
#[account]
#[derive(InitSpace)]
pub struct Amm {
    pub id: Pubkey,     // Client-generated identifier, also the PDA seed
    pub admin: Pubkey,  // Administrator of the market
    pub fee: u16,       // Swap fee in basis points (100 = 1%)
}

impl Amm {
    pub fn assert_valid_fee(fee: u16) -> Result<()> {
        require!(fee <= MAX_FEE_BASIS_POINTS, AmmError::InvalidFee);
        Ok(())
    }

    pub fn decode(data: &[u8]) -> Result<Self> {
        super::decode_account(data)
    }
}
