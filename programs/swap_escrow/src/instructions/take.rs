use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::{constants::ESCROW_SEED, errors::EscrowError, state::Escrow, vault::VaultAuthority};

#[derive(Accounts)]
pub struct Take<'info> {
    /// Any party willing to pay the asking price
    #[account(mut)]
    pub taker: Signer<'info>,

    /// Recorded maker, receives payment and both rents
    #[account(mut)]
    pub maker: SystemAccount<'info>,

    /// Escrow account storing exchange terms (closed to the maker)
    #[account(
        mut,
        close = maker,
        has_one = maker @ EscrowError::AddressMismatch,
        has_one = mint_a @ EscrowError::AddressMismatch,
        has_one = mint_b @ EscrowError::AddressMismatch,
        seeds = [ESCROW_SEED, escrow.maker.as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Box<Account<'info, Escrow>>,

    /// Token A mint
    #[account(mint::token_program = token_program)]
    pub mint_a: Box<InterfaceAccount<'info, Mint>>,

    /// Token B mint
    #[account(mint::token_program = token_program)]
    pub mint_b: Box<InterfaceAccount<'info, Mint>>,

    /// Vault holding Token A (owned by escrow)
    #[account(
        mut,
        associated_token::mint = mint_a,
        associated_token::authority = escrow,
        associated_token::token_program = token_program,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Receives the deposit, created if absent
    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = mint_a,
        associated_token::authority = taker,
        associated_token::token_program = token_program,
    )]
    pub taker_ata_a: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Source of the payment
    #[account(
        mut,
        associated_token::mint = mint_b,
        associated_token::authority = taker,
        associated_token::token_program = token_program,
    )]
    pub taker_ata_b: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Receives the payment, created if absent
    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = mint_b,
        associated_token::authority = maker,
        associated_token::token_program = token_program,
    )]
    pub maker_ata_b: Box<InterfaceAccount<'info, TokenAccount>>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> Take<'info> {
    /// Check every precondition before any token moves
    pub fn validate(&self) -> Result<VaultAuthority> {
        require_gte!(
            self.taker_ata_b.amount,
            self.escrow.receive,
            EscrowError::InsufficientBalance
        );

        VaultAuthority::new(&self.escrow.key(), &self.escrow)
    }

    /// Pay the asking price to the maker
    pub fn transfer_to_maker(&mut self) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.taker_ata_b.to_account_info(),
            mint: self.mint_b.to_account_info(),
            to: self.maker_ata_b.to_account_info(),
            authority: self.taker.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);

        transfer_checked(cpi_ctx, self.escrow.receive, self.mint_b.decimals)
    }

    /// Release the deposit to the taker and close the vault
    pub fn withdraw_and_close_vault(&mut self, authority: &VaultAuthority) -> Result<u64> {
        authority.release_and_close(
            &self.vault,
            &self.mint_a,
            self.escrow.to_account_info(),
            self.taker_ata_a.to_account_info(),
            self.maker.to_account_info(),
            self.token_program.to_account_info(),
        )
    }
}

/// Handler for the take instruction
pub fn handler(ctx: Context<Take>) -> Result<()> {
    let authority = ctx.accounts.validate()?;

    ctx.accounts.transfer_to_maker()?;
    let released = ctx.accounts.withdraw_and_close_vault(&authority)?;

    msg!(
        "escrow {} settled: seed={} paid={} released={}",
        ctx.accounts.escrow.key(),
        ctx.accounts.escrow.seed,
        ctx.accounts.escrow.receive,
        released
    );
    Ok(())
}
