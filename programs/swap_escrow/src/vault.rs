use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    close_account, transfer_checked, CloseAccount, Mint, TokenAccount, TransferChecked,
};

use crate::{constants::ESCROW_SEED, pda, state::Escrow};

/// Signing capability over a vault, held by the program on behalf of the
/// escrow PDA. Only built from a record whose address re-derives correctly.
pub struct VaultAuthority {
    maker: Pubkey,
    seed: [u8; 8],
    bump: [u8; 1],
}

impl VaultAuthority {
    pub(crate) fn new(escrow_key: &Pubkey, escrow: &Escrow) -> Result<Self> {
        pda::verify_escrow_address(escrow_key, &escrow.maker, escrow.seed, escrow.bump)?;

        Ok(Self {
            maker: escrow.maker,
            seed: escrow.seed.to_le_bytes(),
            bump: [escrow.bump],
        })
    }

    fn signer_seeds(&self) -> [&[u8]; 4] {
        [ESCROW_SEED, self.maker.as_ref(), &self.seed, &self.bump]
    }

    /// Move the whole vault balance to `recipient`, then close the vault and
    /// send its rent to `rent_destination`. Returns the amount released.
    pub fn release_and_close<'info>(
        &self,
        vault: &InterfaceAccount<'info, TokenAccount>,
        mint: &InterfaceAccount<'info, Mint>,
        escrow: AccountInfo<'info>,
        recipient: AccountInfo<'info>,
        rent_destination: AccountInfo<'info>,
        token_program: AccountInfo<'info>,
    ) -> Result<u64> {
        let seeds = self.signer_seeds();
        let signer_seeds: &[&[&[u8]]] = &[&seeds];
        let amount = vault.amount;

        let cpi_accounts = TransferChecked {
            from: vault.to_account_info(),
            mint: mint.to_account_info(),
            to: recipient,
            authority: escrow.clone(),
        };
        let cpi_ctx = CpiContext::new_with_signer(token_program.clone(), cpi_accounts, signer_seeds);

        transfer_checked(cpi_ctx, amount, mint.decimals)?;

        let cpi_accounts = CloseAccount {
            account: vault.to_account_info(),
            destination: rent_destination,
            authority: escrow,
        };
        let cpi_ctx = CpiContext::new_with_signer(token_program, cpi_accounts, signer_seeds);

        close_account(cpi_ctx)?;
        Ok(amount)
    }
}
