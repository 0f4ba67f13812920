use anchor_lang::prelude::*;

/// Custom error codes for the Whitelist Vault program
#[error_code]
pub enum VaultError {
    #[msg("Caller is not the vault owner")]
    NotOwner,

    #[msg("Vault is paused")]
    Paused,

    #[msg("Token is not whitelisted")]
    NotWhitelistedToken,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Withdraw amount exceeds deposited balance")]
    ExceedBalance,

    #[msg("New owner cannot be the default pubkey")]
    InvalidNewOwner,

    #[msg("Token whitelist is full")]
    WhitelistFull,

    #[msg("Vault operation already in progress")]
    Reentrancy,

    #[msg("Math overflow occurred during calculation")]
    MathOverflow,

    #[msg("Invalid token mint - does not match deposited token")]
    InvalidMint,

    #[msg("Invalid token account owner")]
    InvalidTokenOwner,
}

/// `NotWhitelistedToken` carrying the rejected mint as its origin.
pub fn not_whitelisted_token(token: Pubkey) -> Error {
    msg!("NotWhitelistedToken: {}", token);
    // Anchor error codes carry no fields; the origin slot is the one string payload
    error!(VaultError::NotWhitelistedToken).with_account_name(token.to_string())
}

/// `ExceedBalance` carrying the requested amount, then the available balance.
pub fn exceed_balance(requested: u64, available: u64) -> Error {
    msg!("ExceedBalance: requested {}, available {}", requested, available);
    error!(VaultError::ExceedBalance).with_values((requested, available))
}
