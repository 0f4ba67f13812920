use anchor_lang::prelude::*;

use crate::{constants::*, events::*, state::*};

/// Add a token to the accepted set
///
#[derive(Accounts)]
pub struct AddToWhitelist<'info> {
    /// Vault owner - only they can manage the whitelist
    /// Security: Must be signer and match vault_state.owner (checked in handler)
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

pub fn handler(ctx: Context<AddToWhitelist>, token: Pubkey) -> Result<()> {
    // CHECKS: Owner only
    ctx.accounts
        .vault_state
        .assert_owner(&ctx.accounts.caller.key())?;

    // EFFECTS: Idempotent insert
    let whitelist = &mut ctx.accounts.token_whitelist;
    if !whitelist.insert(token)? {
        msg!("Token {} already whitelisted", token);
        return Ok(());
    }

    emit!(TokenWhitelisted {
        vault: whitelist.vault,
        token,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
