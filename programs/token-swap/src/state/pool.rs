// Pool State
//
// Identity fields only. Reserves live in the custody token accounts and the
// liquidity supply lives in the liquidity mint; both are read fresh by every
// instruction.

use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Pool {
    pub amm: Pubkey,            // Parent AMM
    pub mint_a: Pubkey,         // First token in pair (lower address)
    pub mint_b: Pubkey,         // Second token in pair
    pub mint_liquidity: Pubkey, // Liquidity token mint
}

impl Pool {
    pub fn decode(data: &[u8]) -> Result<Self> {
        super::decode_account(data)
    }
}
