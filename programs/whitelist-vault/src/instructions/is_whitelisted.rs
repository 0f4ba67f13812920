use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct IsWhitelisted<'info> {
    #[account(
        seeds = [VAULT_SEED],
        bump = vault_state.bump,
    )]
    pub vault_state: Account<'info, VaultState>,

    #[account(
        seeds = [WHITELIST_SEED, vault_state.key().as_ref()],
        bump = token_whitelist.bump,
    )]
    pub token_whitelist: Account<'info, TokenWhitelist>,
}

pub fn handler(ctx: Context<IsWhitelisted>, token: Pubkey) -> Result<bool> {
    Ok(ctx.accounts.token_whitelist.contains(&token))
}
