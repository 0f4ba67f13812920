use anchor_lang::prelude::*;

use crate::{constants::*, events::*, state::*};

/// Resume deposits and withdrawals
#[derive(Accounts)]
pub struct Unpause<'info> {
    /// Must be the vault owner (checked in handler)
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = vault_state.bump,
    )]
    pub vault_state: Account<'info, VaultState>,
}

pub fn handler(ctx: Context<Unpause>) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let vault_state = &mut ctx.accounts.vault_state;

    vault_state.assert_owner(&caller)?;
    vault_state.set_paused(false);

    msg!("Vault unpaused by {}", caller);

    emit!(VaultUnpaused {
        account: caller,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
