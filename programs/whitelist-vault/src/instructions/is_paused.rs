use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct IsPaused<'info> {
    #[account(
        seeds = [VAULT_SEED],
        bump = vault_state.bump,
    )]
    pub vault_state: Account<'info, VaultState>,
}

pub fn handler(ctx: Context<IsPaused>) -> Result<bool> {
    Ok(ctx.accounts.vault_state.paused)
}
