use anchor_lang::prelude::*;

use crate::{constants::*, events::*, state::*};

/// Create the vault; the signer becomes its owner
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Deployer - becomes the vault owner
    /// Security: Must be signer, stored in state
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Vault state PDA
    /// Security: Singleton, initialized with padding for upgrades
    #[account(
        init,
        payer = owner,
        space = VAULT_STATE_SIZE,
        seeds = [VAULT_SEED],
        bump
    )]
    pub vault_state: Account<'info, VaultState>,

    /// Token whitelist PDA, sized for MAX_WHITELISTED_TOKENS
    #[account(
        init,
        payer = owner,
        space = TOKEN_WHITELIST_SIZE,
        seeds = [WHITELIST_SEED, vault_state.key().as_ref()],
        bump
    )]
    pub token_whitelist: Account<'info, TokenWhitelist>,

    /// Vault authority PDA - owns every vault token account
    /// CHECK: PDA used as token account authority, validated by seeds
    #[account(
        seeds = [VAULT_AUTHORITY_SEED],
        bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let vault_state = &mut ctx.accounts.vault_state;

    // EFFECTS: Initialize vault state
    vault_state.owner = ctx.accounts.owner.key();
    vault_state.paused = false;
    vault_state.locked = false;
    vault_state.bump = ctx.bumps.vault_state;
    vault_state.authority_bump = ctx.bumps.vault_authority;
    vault_state._reserved = [0; 64];

    let whitelist = &mut ctx.accounts.token_whitelist;
    whitelist.vault = vault_state.key();
    whitelist.tokens = Vec::new();
    whitelist.bump = ctx.bumps.token_whitelist;

    emit!(VaultInitialized {
        vault: vault_state.key(),
        owner: vault_state.owner,
        whitelist: whitelist.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
