use anchor_lang::prelude::*;

use crate::{constants::MAX_WHITELISTED_TOKENS, errors::*};

/// Global vault state: administrator, pause switch and reentrancy flag
///
/// Security considerations:
/// - Owner stored in state (not instruction args), checked by every admin handler
/// - `locked` is persisted before any token CPI so a reentrant call observes it
/// - Bumps stored for efficient PDA signing
/// - 64 bytes padding for future upgrades
#[account]
pub struct VaultState {
    /// Sole administrator; never the default pubkey once initialized
    pub owner: Pubkey,              // 32 bytes

    /// Emergency switch gating deposit and withdraw
    pub paused: bool,               // 1 byte

    /// Set while a deposit or withdraw is in flight
    pub locked: bool,               // 1 byte

    /// Bump seed for vault state PDA
    pub bump: u8,                   // 1 byte

    /// Bump seed for vault authority PDA
    pub authority_bump: u8,         // 1 byte

    // Padding for future upgrades
    pub _reserved: [u8; 64],        // 64 bytes
}

/// Set of mints the vault accepts
///
/// Order of `tokens` carries no meaning; membership is all that matters.
#[account]
pub struct TokenWhitelist {
    /// Vault this whitelist belongs to
    pub vault: Pubkey,              // 32 bytes

    /// Whitelisted mints, at most MAX_WHITELISTED_TOKENS
    pub tokens: Vec<Pubkey>,        // 4 + (n * 32) bytes

    /// Bump seed for PDA
    pub bump: u8,                   // 1 byte
}

/// Ledger entry: `owner`'s claim on `mint` held by the vault
#[account]
pub struct UserBalance {
    pub owner: Pubkey,              // 32 bytes
    pub mint: Pubkey,               // 32 bytes
    pub amount: u64,                // 8 bytes
    pub bump: u8,                   // 1 byte
}

impl VaultState {
    pub fn is_owner(&self, caller: &Pubkey) -> bool {
        self.owner == *caller
    }

    /// Administrator capability check run at the top of every admin handler
    pub fn assert_owner(&self, caller: &Pubkey) -> Result<()> {
        require!(self.is_owner(caller), VaultError::NotOwner);
        Ok(())
    }

    pub fn assert_active(&self) -> Result<()> {
        require!(!self.paused, VaultError::Paused);
        Ok(())
    }

    /// Idempotent: pausing a paused vault is not an error
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Replace the owner, returning the previous one
    pub fn transfer_ownership(&mut self, new_owner: Pubkey) -> Result<Pubkey> {
        require!(new_owner != Pubkey::default(), VaultError::InvalidNewOwner);
        let previous = self.owner;
        self.owner = new_owner;
        Ok(previous)
    }

    /// Preconditions shared by deposit and withdraw, checked in order:
    /// pause state, whitelist membership, non-zero amount.
    pub fn validate_transfer(
        &self,
        whitelist: &TokenWhitelist,
        mint: &Pubkey,
        amount: u64,
    ) -> Result<()> {
        self.assert_active()?;
        whitelist.assert_whitelisted(mint)?;
        require!(amount > 0, VaultError::ZeroAmount);
        Ok(())
    }

    /// Enter the non-reentrant section
    pub fn lock(&mut self) -> Result<()> {
        require!(!self.locked, VaultError::Reentrancy);
        self.locked = true;
        Ok(())
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Deposit sequence: checks, guard, `pull`, credit, release.
    ///
    /// `pull` moves the tokens into custody. It runs with the guard held and
    /// must write the state it is given back to the account before any CPI.
    /// On error the guard stays set in memory; the failed transaction
    /// discards it along with every other write.
    pub fn process_deposit<F>(
        &mut self,
        whitelist: &TokenWhitelist,
        entry: &mut UserBalance,
        mint: Pubkey,
        amount: u64,
        pull: F,
    ) -> Result<()>
    where
        F: FnOnce(&VaultState) -> Result<()>,
    {
        // CHECKS: pause, whitelist, amount (in that order)
        self.validate_transfer(whitelist, &mint, amount)?;
        self.lock()?;

        // INTERACTIONS: funds arrive before the ledger is credited
        pull(self)?;

        // EFFECTS
        entry.credit(amount)?;
        self.unlock();
        Ok(())
    }

    /// Withdraw sequence: checks, guard, debit, `push`, release.
    ///
    /// `push` pays the tokens out. It sees the debited entry and the held
    /// guard, both of which it must write back before any CPI.
    pub fn process_withdraw<F>(
        &mut self,
        whitelist: &TokenWhitelist,
        entry: &mut UserBalance,
        mint: Pubkey,
        amount: u64,
        push: F,
    ) -> Result<()>
    where
        F: FnOnce(&VaultState, &UserBalance) -> Result<()>,
    {
        // CHECKS: pause, whitelist, amount (in that order)
        self.validate_transfer(whitelist, &mint, amount)?;
        self.lock()?;

        // CHECKS + EFFECTS: balance check and debit BEFORE the external call
        entry.debit(amount)?;

        // INTERACTIONS
        push(self, entry)?;

        self.unlock();
        Ok(())
    }
}

impl TokenWhitelist {
    pub fn contains(&self, mint: &Pubkey) -> bool {
        self.tokens.iter().any(|t| t == mint)
    }

    pub fn assert_whitelisted(&self, mint: &Pubkey) -> Result<()> {
        if !self.contains(mint) {
            return Err(not_whitelisted_token(*mint));
        }
        Ok(())
    }

    /// Add a mint. Returns whether membership changed; re-adding is a no-op.
    pub fn insert(&mut self, mint: Pubkey) -> Result<bool> {
        if self.contains(&mint) {
            return Ok(false);
        }
        require!(
            self.tokens.len() < MAX_WHITELISTED_TOKENS,
            VaultError::WhitelistFull
        );
        self.tokens.push(mint);
        Ok(true)
    }

    /// Remove a mint. Returns whether membership changed; removing an absent
    /// mint is a no-op.
    pub fn remove(&mut self, mint: &Pubkey) -> bool {
        match self.tokens.iter().position(|t| t == mint) {
            Some(index) => {
                self.tokens.swap_remove(index);
                true
            }
            None => false,
        }
    }
}

impl UserBalance {
    /// Record owner, mint and bump on a freshly created entry
    pub fn bind(&mut self, owner: Pubkey, mint: Pubkey, bump: u8) {
        if self.owner == Pubkey::default() {
            self.owner = owner;
            self.mint = mint;
            self.bump = bump;
        }
    }

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(VaultError::MathOverflow)?;
        Ok(())
    }

    /// Fails with `ExceedBalance` carrying the requested amount
    pub fn debit(&mut self, amount: u64) -> Result<()> {
        if self.amount < amount {
            return Err(exceed_balance(amount, self.amount));
        }
        self.amount -= amount;
        Ok(())
    }
}

/// Serialize `account` into `info` mid-instruction so a CPI that re-enters
/// the program reads the current state.
pub fn write_back<T: AccountSerialize>(account: &T, info: &AccountInfo) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut dst: &mut [u8] = &mut data;
    account.try_serialize(&mut dst)
}
