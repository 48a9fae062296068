use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{constants::ESCROW_SEED, errors::EscrowError, state::Escrow, vault::VaultAuthority};

#[derive(Accounts)]
pub struct Refund<'info> {
    /// The maker who originally created the escrow (only one allowed to refund)
    #[account(mut)]
    pub maker: Signer<'info>,

    /// Escrow account storing exchange terms (closed to the maker)
    #[account(
        mut,
        close = maker,
        has_one = maker @ EscrowError::Unauthorized,
        has_one = mint_a @ EscrowError::AddressMismatch,
        seeds = [ESCROW_SEED, escrow.maker.as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, Escrow>,

    /// Token A mint
    #[account(mint::token_program = token_program)]
    pub mint_a: InterfaceAccount<'info, Mint>,

    /// Vault holding Token A (owned by escrow)
    #[account(
        mut,
        associated_token::mint = mint_a,
        associated_token::authority = escrow,
        associated_token::token_program = token_program,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// Receives the deposit back, created if absent
    #[account(
        init_if_needed,
        payer = maker,
        associated_token::mint = mint_a,
        associated_token::authority = maker,
        associated_token::token_program = token_program,
    )]
    pub maker_ata_a: InterfaceAccount<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> Refund<'info> {
    /// Return the deposit to the maker and close the vault
    pub fn refund_and_close_vault(&mut self) -> Result<u64> {
        let authority = VaultAuthority::new(&self.escrow.key(), &self.escrow)?;

        authority.release_and_close(
            &self.vault,
            &self.mint_a,
            self.escrow.to_account_info(),
            self.maker_ata_a.to_account_info(),
            self.maker.to_account_info(),
            self.token_program.to_account_info(),
        )
    }
}

/// Handler for the refund instruction
pub fn handler(ctx: Context<Refund>) -> Result<()> {
    let refunded = ctx.accounts.refund_and_close_vault()?;

    msg!(
        "escrow {} refunded: seed={} returned={}",
        ctx.accounts.escrow.key(),
        ctx.accounts.escrow.seed,
        refunded
    );
    Ok(())
}
