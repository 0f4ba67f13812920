use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, Token, TokenAccount, TransferChecked},
};

use crate::{constants::*, errors::*, events::*, state::*};

/// Withdraw previously deposited tokens
///
/// Security checklist:
/// ✅ 1. SIGNER VALIDATION: User must be signer
/// ✅ 2. ACCOUNT OWNERSHIP: Ledger entry derived from (mint, user)
/// ✅ 6. MATH SAFETY: Debit never goes below zero
/// ✅ 7. TOKEN ACCOUNT VALIDATION: Validates mint and owner
/// ✅ 8. BUSINESS LOGIC: Debit persisted before the outbound transfer; non-reentrant
/// ✅ 10. EVENTS: Emits Withdraw event
#[derive(Accounts)]
pub struct WithdrawTokens<'info> {
    /// User withdrawing tokens
    #[account(mut)]
    pub user: Signer<'info>,

    /// Vault state PDA
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

    /// Mint of the withdrawn token
    pub mint: Account<'info, Mint>,

    /// Vault authority PDA - signs the outbound transfer
    /// CHECK: PDA used as authority, validated by seeds
    #[account(
        seeds = [VAULT_AUTHORITY_SEED],
        bump = vault_state.authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// Ledger entry for (mint, user)
    /// Security: A missing entry is created empty so the balance check reports
    /// ExceedBalance; the failed transaction discards it again
    #[account(
        init_if_needed,
        payer = user,
        space = USER_BALANCE_SIZE,
        seeds = [BALANCE_SEED, mint.key().as_ref(), user.key().as_ref()],
        bump,
    )]
    pub user_balance: Account<'info, UserBalance>,

    /// User's token account (destination)
    #[account(
        mut,
        constraint = user_token_account.mint == mint.key() @ VaultError::InvalidMint,
        constraint = user_token_account.owner == user.key() @ VaultError::InvalidTokenOwner,
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Vault's token account for this mint (source)
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

pub fn handler(ctx: Context<WithdrawTokens>, amount: u64) -> Result<()> {
    let mint_key = ctx.accounts.mint.key();
    let user_key = ctx.accounts.user.key();
    let decimals = ctx.accounts.mint.decimals;
    let authority_bump = ctx.accounts.vault_state.authority_bump;
    let vault_info = ctx.accounts.vault_state.to_account_info();
    let balance_info = ctx.accounts.user_balance.to_account_info();

    let token_program = ctx.accounts.token_program.to_account_info();
    let transfer_accounts = TransferChecked {
        from: ctx.accounts.vault_token_account.to_account_info(),
        mint: ctx.accounts.mint.to_account_info(),
        to: ctx.accounts.user_token_account.to_account_info(),
        authority: ctx.accounts.vault_authority.to_account_info(),
    };

    ctx.accounts.vault_state.process_withdraw(
        &ctx.accounts.token_whitelist,
        &mut ctx.accounts.user_balance,
        mint_key,
        amount,
        move |vault, entry| {
            // Persist guard and debit so a nested invocation sees both
            write_back(vault, &vault_info)?;
            write_back(entry, &balance_info)?;

            // INTERACTIONS: Push funds to the user
            let authority_seeds: &[&[u8]] = &[VAULT_AUTHORITY_SEED, &[authority_bump]];
            let signer_seeds = &[&authority_seeds[..]];
            let transfer_ctx =
                CpiContext::new_with_signer(token_program, transfer_accounts, signer_seeds);
            token::transfer_checked(transfer_ctx, amount, decimals)
        },
    )?;

    emit!(Withdraw {
        account: user_key,
        token: mint_key,
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
