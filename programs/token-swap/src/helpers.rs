// Token CPI Helpers
//
// Users sign for tokens leaving their own accounts. Anything leaving custody
// or minted as liquidity is signed by the pool authority through PoolSigner,
// which carries the pool's signer seeds.

use anchor_lang::prelude::*;
use anchor_spl::token::{Burn, MintTo, Transfer, burn, mint_to, transfer};

use crate::{errors::*, pda, state::Pool};

// Fail before any CPI when a source account cannot cover the amount
pub fn assert_sufficient_balance(balance: u64, amount: u64) -> Result<()> {
    require!(balance >= amount, AmmError::InsufficientBalance);
    Ok(())
}

// User -> custody, signed by the owner of `from`
pub fn deposit_into_custody<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    custody: &AccountInfo<'info>,
    owner: &AccountInfo<'info>,
) -> Result<()> {
    let accounts = Transfer {
        from: from.clone(),
        to: custody.clone(),
        authority: owner.clone(),
    };
    transfer(CpiContext::new(token_program.clone(), accounts), amount)
}

// Liquidity tokens are burned by their holder, no PDA involved
pub fn burn_liquidity<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    mint_liquidity: &AccountInfo<'info>,
    holder_account: &AccountInfo<'info>,
    holder: &AccountInfo<'info>,
) -> Result<()> {
    let accounts = Burn {
        mint: mint_liquidity.clone(),
        from: holder_account.clone(),
        authority: holder.clone(),
    };
    burn(CpiContext::new(token_program.clone(), accounts), amount)
}

pub struct PoolSigner<'a, 'info> {
    token_program: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    seeds: [&'a [u8]; 5],
}

impl<'a, 'info> PoolSigner<'a, 'info> {
    pub fn new(
        pool: &'a Pool,
        bump: &'a [u8; 1],
        token_program: AccountInfo<'info>,
        authority: AccountInfo<'info>,
    ) -> Self {
        Self {
            token_program,
            authority,
            seeds: pda::pool_authority_seeds(&pool.amm, &pool.mint_a, &pool.mint_b, bump),
        }
    }

    pub fn seeds(&self) -> &[&'a [u8]] {
        &self.seeds
    }

    // Custody -> recipient
    pub fn pay_out(
        &self,
        amount: u64,
        custody: &AccountInfo<'info>,
        recipient: &AccountInfo<'info>,
    ) -> Result<()> {
        let accounts = Transfer {
            from: custody.clone(),
            to: recipient.clone(),
            authority: self.authority.clone(),
        };
        let signer_seeds = &[self.seeds()];
        transfer(
            CpiContext::new_with_signer(self.token_program.clone(), accounts, signer_seeds),
            amount,
        )
    }

    pub fn mint_liquidity(
        &self,
        amount: u64,
        mint_liquidity: &AccountInfo<'info>,
        recipient: &AccountInfo<'info>,
    ) -> Result<()> {
        let accounts = MintTo {
            mint: mint_liquidity.clone(),
            to: recipient.clone(),
            authority: self.authority.clone(),
        };
        let signer_seeds = &[self.seeds()];
        mint_to(
            CpiContext::new_with_signer(self.token_program.clone(), accounts, signer_seeds),
            amount,
        )
    }
}
