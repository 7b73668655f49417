// Address Derivation
//
// Every account the program owns sits at a program-derived address, so any
// party holding the AMM key and the two mints can locate the pool, its
// authority and its liquidity mint without a lookup.
//
//   amm            = [id]
//   pool           = [amm, mint_a, mint_b]
//   pool authority = [amm, mint_a, mint_b, "authority"]
//   liquidity mint = [amm, mint_a, mint_b, "liquidity"]

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*};

fn derive(seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(seeds, program_id)
        .ok_or_else(|| error!(AmmError::DerivationExhausted))
}

pub fn derive_amm(program_id: &Pubkey, id: &Pubkey) -> Result<(Pubkey, u8)> {
    derive(&[id.as_ref()], program_id)
}

pub fn derive_pool(
    program_id: &Pubkey,
    amm: &Pubkey,
    mint_a: &Pubkey,
    mint_b: &Pubkey,
) -> Result<(Pubkey, u8)> {
    derive(&[amm.as_ref(), mint_a.as_ref(), mint_b.as_ref()], program_id)
}

pub fn derive_pool_authority(
    program_id: &Pubkey,
    amm: &Pubkey,
    mint_a: &Pubkey,
    mint_b: &Pubkey,
) -> Result<(Pubkey, u8)> {
    derive(
        &[amm.as_ref(), mint_a.as_ref(), mint_b.as_ref(), AUTHORITY_SEED],
        program_id,
    )
}

pub fn derive_liquidity_mint(
    program_id: &Pubkey,
    amm: &Pubkey,
    mint_a: &Pubkey,
    mint_b: &Pubkey,
) -> Result<(Pubkey, u8)> {
    derive(
        &[amm.as_ref(), mint_a.as_ref(), mint_b.as_ref(), LIQUIDITY_SEED],
        program_id,
    )
}

// Signer seeds for the pool authority, used for every CPI it signs
pub fn pool_authority_seeds<'a>(
    amm: &'a Pubkey,
    mint_a: &'a Pubkey,
    mint_b: &'a Pubkey,
    bump: &'a [u8; 1],
) -> [&'a [u8]; 5] {
    [
        amm.as_ref(),
        mint_a.as_ref(),
        mint_b.as_ref(),
        AUTHORITY_SEED,
        bump.as_ref(),
    ]
}
