use anchor_lang::prelude::*;

use crate::{constants::*, events::*, state::*};

/// Freeze deposits and withdrawals
#[derive(Accounts)]
pub struct Pause<'info> {
    /// Must be the vault owner (checked in handler)
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = vault_state.bump,
    )]
    pub vault_state: Account<'info, VaultState>,
}

pub fn handler(ctx: Context<Pause>) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let vault_state = &mut ctx.accounts.vault_state;

    vault_state.assert_owner(&caller)?;
    vault_state.set_paused(true);

    msg!("Vault paused by {}", caller);

    emit!(VaultPaused {
        account: caller,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
