// Whitelist Vault - multi-token custody vault on Solana
// Security: Owner-gated administration, pause switch, checked ledger math,
// non-reentrant deposit/withdraw

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("BZpQMx3A3LFTWumbLc24JQ4KNpjftpVo8GfPKfJod1y7");

#[program]
pub mod whitelist_vault {
    use super::*;

    /// Create the vault with the signer as owner
    ///
    /// Starts unpaused with an empty whitelist and no balances.
    ///
    /// Deployment assumption: any signer may call this, and the first call
    /// wins ownership. The deployer must initialize in the same step as the
    /// program deploy, before anyone else can.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Deposit whitelisted tokens and credit the caller's ledger entry
    ///
    /// Security considerations:
    /// - Fails with Paused, NotWhitelistedToken, ZeroAmount in that order
    /// - Validates user token account (mint, owner)
    /// - Pulls funds before crediting; a failed pull aborts everything
    /// - Non-reentrant
    /// - Emits the `Deposit` event (the accounts struct is `DepositTokens`)
    pub fn deposit(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    /// Withdraw up to the caller's ledger balance
    ///
    /// Security considerations:
    /// - Fails with Paused, NotWhitelistedToken, ZeroAmount, ExceedBalance in that order
    /// - Debits the ledger before the outbound transfer
    /// - Non-reentrant
    /// - Emits the `Withdraw` event (the accounts struct is `WithdrawTokens`)
    pub fn withdraw(ctx: Context<WithdrawTokens>, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, amount)
    }

    /// Freeze deposit and withdraw (owner only)
    pub fn pause(ctx: Context<Pause>) -> Result<()> {
        instructions::pause::handler(ctx)
    }

    /// Unfreeze deposit and withdraw (owner only)
    pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
        instructions::unpause::handler(ctx)
    }

    /// Accept a token (owner only, idempotent)
    pub fn add_to_whitelist(ctx: Context<AddToWhitelist>, token: Pubkey) -> Result<()> {
        instructions::add_to_whitelist::handler(ctx, token)
    }

    /// Stop accepting a token (owner only, idempotent)
    ///
    /// Outstanding balances stay on the ledger; re-adding the token releases them.
    pub fn remove_from_whitelist(
        ctx: Context<RemoveFromWhitelist>,
        token: Pubkey,
    ) -> Result<()> {
        instructions::remove_from_whitelist::handler(ctx, token)
    }

    /// Hand administration to `new_owner` (owner only, never the default pubkey)
    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership::handler(ctx, new_owner)
    }

    /// Ledger balance of `account` for `token`; 0 if it never deposited
    pub fn balance_of(ctx: Context<BalanceOf>, token: Pubkey, account: Pubkey) -> Result<u64> {
        instructions::balance_of::handler(ctx, token, account)
    }

    /// Whether deposits and withdrawals of `token` are accepted
    pub fn is_whitelisted(ctx: Context<IsWhitelisted>, token: Pubkey) -> Result<bool> {
        instructions::is_whitelisted::handler(ctx, token)
    }

    /// Whether the vault is paused
    pub fn is_paused(ctx: Context<IsPaused>) -> Result<bool> {
        instructions::is_paused::handler(ctx)
    }

    /// The vault administrator
    pub fn current_owner(ctx: Context<CurrentOwner>) -> Result<Pubkey> {
        instructions::current_owner::handler(ctx)
    }
}
