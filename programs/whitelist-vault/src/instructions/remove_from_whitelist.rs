use anchor_lang::prelude::*;

use crate::{constants::*, events::*, state::*};

/// Remove a token from the accepted set
///
/// Existing ledger entries for the token are left untouched.
#[derive(Accounts)]
pub struct RemoveFromWhitelist<'info> {
    /// Vault owner - only they can manage the whitelist
    pub caller: Signer<'info>,

    /// Vault state PDA
    #[account(
        seeds = [VAULT_SEED],
        bump = vault_state.bump,
    )]
    pub vault_state: Account<'info, VaultState>,

    /// Token whitelist PDA
    #[account(
        mut,
        seeds = [WHITELIST_SEED, vault_state.key().as_ref()],
        bump = token_whitelist.bump,
    )]
    pub token_whitelist: Account<'info, TokenWhitelist>,
}

pub fn handler(ctx: Context<RemoveFromWhitelist>, token: Pubkey) -> Result<()> {
    ctx.accounts
        .vault_state
        .assert_owner(&ctx.accounts.caller.key())?;

    let whitelist = &mut ctx.accounts.token_whitelist;
    if !whitelist.remove(&token) {
        msg!("Token {} not whitelisted", token);
        return Ok(());
    }

    emit!(TokenRemovedFromWhitelist {
        vault: whitelist.vault,
        token,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
