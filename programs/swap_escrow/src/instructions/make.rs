use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::{
    constants::ESCROW_SEED,
    errors::EscrowError,
    state::{Escrow, Offer},
};

#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct Make<'info> {
    /// Offering party, pays rent for the record and the vault
    #[account(mut)]
    pub maker: Signer<'info>,

    /// Escrow record at ["escrow", maker, seed]
    #[account(
        init,
        payer = maker,
        space = Escrow::SPACE,
        seeds = [ESCROW_SEED, maker.key().as_ref(), seed.to_le_bytes().as_ref()],
        bump,
    )]
    pub escrow: Account<'info, Escrow>,

    /// Mint of the deposited token
    #[account(mint::token_program = token_program)]
    pub mint_a: InterfaceAccount<'info, Mint>,

    /// Mint of the requested token
    #[account(mint::token_program = token_program)]
    pub mint_b: InterfaceAccount<'info, Mint>,

    /// Source of the deposit
    #[account(
        mut,
        associated_token::mint = mint_a,
        associated_token::authority = maker,
        associated_token::token_program = token_program,
    )]
    pub maker_ata_a: InterfaceAccount<'info, TokenAccount>,

    /// Vault, the escrow record's token account for mint A. Anyone may create
    /// an associated token account, so an empty one already in place is reused.
    #[account(
        init_if_needed,
        payer = maker,
        associated_token::mint = mint_a,
        associated_token::authority = escrow,
        associated_token::token_program = token_program,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> Make<'info> {
    /// Validate the terms against the accounts supplied
    pub fn validate(&self, deposit: u64, receive: u64) -> Result<Offer> {
        let offer = Offer::new(&self.mint_a.key(), &self.mint_b.key(), deposit, receive)?;

        // The vault must hold exactly the deposit once the record exists
        require_eq!(self.vault.amount, 0, EscrowError::AlreadyResolved);

        require_gte!(
            self.maker_ata_a.amount,
            offer.deposit,
            EscrowError::InsufficientBalance
        );

        Ok(offer)
    }

    /// Record the terms; the record is never written again
    pub fn init_escrow(&mut self, seed: u64, offer: &Offer, bumps: &MakeBumps) -> Result<()> {
        self.escrow.set_inner(Escrow {
            seed,
            maker: self.maker.key(),
            mint_a: self.mint_a.key(),
            mint_b: self.mint_b.key(),
            receive: offer.receive,
            bump: bumps.escrow,
        });
        Ok(())
    }

    /// Move the deposit from the maker into the vault
    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.maker_ata_a.to_account_info(),
            mint: self.mint_a.to_account_info(),
            to: self.vault.to_account_info(),
            authority: self.maker.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);

        transfer_checked(cpi_ctx, amount, self.mint_a.decimals)
    }
}

/// Handler for the make instruction
pub fn handler(ctx: Context<Make>, seed: u64, deposit: u64, receive: u64) -> Result<()> {
    let offer = ctx.accounts.validate(deposit, receive)?;

    ctx.accounts.init_escrow(seed, &offer, &ctx.bumps)?;
    ctx.accounts.deposit(offer.deposit)?;

    msg!(
        "escrow {} opened: seed={} deposit={} receive={}",
        ctx.accounts.escrow.key(),
        seed,
        offer.deposit,
        offer.receive
    );
    Ok(())
}
