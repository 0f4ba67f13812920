use anchor_lang::prelude::*;

/// Event emitted when the vault is initialized
#[event]
pub struct VaultInitialized {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub whitelist: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when tokens are deposited
#[event]
pub struct Deposit {
    pub account: Pubkey,
    pub token: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

/// Event emitted when tokens are withdrawn
#[event]
pub struct Withdraw {
    pub account: Pubkey,
    pub token: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct VaultPaused {
    pub account: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct VaultUnpaused {
    pub account: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when a token joins the whitelist
#[event]
pub struct TokenWhitelisted {
    pub vault: Pubkey,
    pub token: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when a token leaves the whitelist
#[event]
pub struct TokenRemovedFromWhitelist {
    pub vault: Pubkey,
    pub token: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
    pub timestamp: i64,
}
