// Constants for the Whitelist Vault program

/// Seed for the singleton vault state PDA
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed for the PDA that owns every vault token account
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault_authority";

/// Seed for the token whitelist PDA
pub const WHITELIST_SEED: &[u8] = b"token_whitelist";

/// Seed for per (mint, account) ledger entries
pub const BALANCE_SEED: &[u8] = b"balance";

/// Upper bound on whitelisted mints; the whitelist account is sized for it
pub const MAX_WHITELISTED_TOKENS: usize = 32;

/// Space for VaultState account (8 discriminator + 32 owner + 1 paused +
/// 1 locked + 1 bump + 1 authority_bump + 64 padding)
pub const VAULT_STATE_SIZE: usize = 8 + 32 + 1 + 1 + 1 + 1 + 64;

/// Space for TokenWhitelist account (8 discriminator + 32 vault +
/// 4 vec len + 32 per mint + 1 bump)
pub const TOKEN_WHITELIST_SIZE: usize = 8 + 32 + 4 + (MAX_WHITELISTED_TOKENS * 32) + 1;

/// Space for UserBalance account (8 discriminator + 32 owner + 32 mint +
/// 8 amount + 1 bump)
pub const USER_BALANCE_SIZE: usize = 8 + 32 + 32 + 8 + 1;
