// Create AMM Instruction
//
// Registers a market under a client-chosen id. The fee set here applies to
// every pool of the market and can never change.

use anchor_lang::prelude::*;

use crate::{constants::*, events::*, state::*};

#[derive(Accounts)]
#[instruction(id: Pubkey)]
pub struct CreateAmm<'info> {
    #[account(
        init,
        payer = payer,
        space = ANCHOR_DISCRIMINATOR + Amm::INIT_SPACE,
        seeds = [id.as_ref()],
        bump,
    )]
    pub amm: Account<'info, Amm>,

    pub admin: Signer<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateAmm<'info> {
    pub fn create_amm(&mut self, id: Pubkey, fee: u16) -> Result<()> {
        Amm::assert_valid_fee(fee)?;

        self.amm.set_inner(Amm {
            id,
            admin: self.admin.key(),
            fee,
        });

        msg!("AMM created: {}", self.amm.key());
        msg!("Fee: {} basis points", fee);

        emit!(AmmCreated {
            amm: self.amm.key(),
            id,
            admin: self.admin.key(),
            fee,
        });

        Ok(())
    }
}
