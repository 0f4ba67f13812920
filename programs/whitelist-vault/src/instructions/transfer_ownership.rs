use anchor_lang::prelude::*;

use crate::{constants::*, events::*, state::*};

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    /// Current owner (checked in handler)
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = vault_state.bump,
    )]
    pub vault_state: Account<'info, VaultState>,
}

pub fn handler(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let vault_state = &mut ctx.accounts.vault_state;

    vault_state.assert_owner(&ctx.accounts.caller.key())?;
    let previous_owner = vault_state.transfer_ownership(new_owner)?;

    msg!("Ownership transferred: {} -> {}", previous_owner, new_owner);

    emit!(OwnershipTransferred {
        previous_owner,
        new_owner,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
