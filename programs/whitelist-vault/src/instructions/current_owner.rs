use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct CurrentOwner<'info> {
    #[account(
        seeds = [VAULT_SEED],
        bump = vault_state.bump,
    )]
    pub vault_state: Account<'info, VaultState>,
}

pub fn handler(ctx: Context<CurrentOwner>) -> Result<Pubkey> {
    Ok(ctx.accounts.vault_state.owner)
}
