//! Deterministic addresses for escrow records and their vaults.
//!
//! A record lives at `["escrow", maker, seed_le]` under this program, and its
//! vault is the record's associated token account for mint A. Nothing is stored
//! in a registry: anyone holding `(maker, seed)` can recompute both addresses.

use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address_with_program_id;

use crate::{constants::ESCROW_SEED, errors::EscrowError, ID};

/// Find the escrow record address and its canonical bump
pub fn escrow_address(maker: &Pubkey, seed: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ESCROW_SEED, maker.as_ref(), &seed.to_le_bytes()], &ID)
}

/// Vault holding the deposit of `mint` for the escrow at `escrow`
pub fn vault_address(escrow: &Pubkey, mint: &Pubkey, token_program: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(escrow, mint, token_program)
}

/// Re-derive the record address from its stored seeds and compare it with `key`
pub fn verify_escrow_address(key: &Pubkey, maker: &Pubkey, seed: u64, bump: u8) -> Result<()> {
    let derived = Pubkey::create_program_address(
        &[ESCROW_SEED, maker.as_ref(), &seed.to_le_bytes(), &[bump]],
        &ID,
    )
    .map_err(|_| error!(EscrowError::AddressMismatch))?;

    require_keys_eq!(derived, *key, EscrowError::AddressMismatch);
    Ok(())
}
