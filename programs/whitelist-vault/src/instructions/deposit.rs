use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, Token, TokenAccount, TransferChecked},
};

use crate::{constants::*, errors::*, events::*, state::*};

/// Deposit whitelisted tokens into the vault
///
/// Security checklist:
/// ✅ 1. SIGNER VALIDATION: User must be signer
/// ✅ 2. ACCOUNT OWNERSHIP: Vault PDAs validated with seeds
/// ✅ 6. MATH SAFETY: Ledger credit uses checked add
/// ✅ 7. TOKEN ACCOUNT VALIDATION: Validates mint and owner
/// ✅ 8. BUSINESS LOGIC: Pull funds, then credit; non-reentrant
/// ✅ 10. EVENTS: Emits Deposit event
#[derive(Accounts)]
pub struct DepositTokens<'info> {
    /// User depositing tokens
    /// Security: Must be signer, pays for new ledger entries
    #[account(mut)]
    pub user: Signer<'info>,

    /// Vault state PDA
    /// Security: Validated by seeds, holds pause and reentrancy flags
    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = vault_state.bump,
    )]
    pub vault_state: Account<'info, VaultState>,

    /// Token whitelist PDA
    #[account(
        seeds = [WHITELIST_SEED, vault_state.key().as_ref()],
        bump = token_whitelist.bump,
    )]
    pub token_whitelist: Account<'info, TokenWhitelist>,

    /// Mint of the deposited token
    pub mint: Account<'info, Mint>,

    /// Vault authority PDA
    /// CHECK: PDA used as authority, validated by seeds
    #[account(
        seeds = [VAULT_AUTHORITY_SEED],
        bump = vault_state.authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// Ledger entry for (mint, user)
    #[account(
        init_if_needed,
        payer = user,
        space = USER_BALANCE_SIZE,
        seeds = [BALANCE_SEED, mint.key().as_ref(), user.key().as_ref()],
        bump,
    )]
    pub user_balance: Account<'info, UserBalance>,

    /// User's token account (source)
    /// Security: Must be owned by user and correct mint
    #[account(
        mut,
        constraint = user_token_account.mint == mint.key() @ VaultError::InvalidMint,
        constraint = user_token_account.owner == user.key() @ VaultError::InvalidTokenOwner,
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Vault's token account for this mint
    /// Security: Associated account of vault_authority, created on first deposit
    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = mint,
        associated_token::authority = vault_authority,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
    let mint_key = ctx.accounts.mint.key();
    let user_key = ctx.accounts.user.key();
    let decimals = ctx.accounts.mint.decimals;
    let vault_info = ctx.accounts.vault_state.to_account_info();

    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        TransferChecked {
            from: ctx.accounts.user_token_account.to_account_info(),
            mint: ctx.accounts.mint.to_account_info(),
            to: ctx.accounts.vault_token_account.to_account_info(),
            authority: ctx.accounts.user.to_account_info(),
        },
    );

    ctx.accounts
        .user_balance
        .bind(user_key, mint_key, ctx.bumps.user_balance);

    ctx.accounts.vault_state.process_deposit(
        &ctx.accounts.token_whitelist,
        &mut ctx.accounts.user_balance,
        mint_key,
        amount,
        move |vault| {
            // Guard is written back so a nested invocation sees it
            write_back(vault, &vault_info)?;
            token::transfer_checked(transfer_ctx, amount, decimals)
        },
    )?;

    emit!(Deposit {
        account: user_key,
        token: mint_key,
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
