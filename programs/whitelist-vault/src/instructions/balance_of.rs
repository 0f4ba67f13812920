use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

/// Read the ledger entry for (token, account)
#[derive(Accounts)]
#[instruction(token: Pubkey, account: Pubkey)]
pub struct BalanceOf<'info> {
    /// Ledger entry PDA; may not exist yet
    /// CHECK: Validated by seeds, deserialized only when owned by this program
    #[account(
        seeds = [BALANCE_SEED, token.as_ref(), account.as_ref()],
        bump,
    )]
    pub user_balance: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<BalanceOf>, _token: Pubkey, _account: Pubkey) -> Result<u64> {
    let info = ctx.accounts.user_balance.to_account_info();

    // Never deposited: no entry, zero balance
    if info.data_is_empty() || info.owner != &crate::ID {
        return Ok(0);
    }

    let data = info.try_borrow_data()?;
    let entry = UserBalance::try_deserialize(&mut &data[..])?;
    Ok(entry.amount)
}
