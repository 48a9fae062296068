use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Unauthorized: signer is not the escrow maker")]
    Unauthorized,
    #[msg("Address mismatch: account does not match the escrow derivation")]
    AddressMismatch,
    #[msg("Insufficient balance: source token account cannot cover the transfer")]
    InsufficientBalance,
    #[msg("Invalid offer: amounts must be non-zero and mints must differ")]
    InvalidOffer,
    #[msg("Already resolved: escrow has been taken or refunded")]
    AlreadyResolved,
}
