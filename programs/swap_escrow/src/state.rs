use anchor_lang::{prelude::*, Discriminator};

use crate::errors::EscrowError;

/// Escrow account that stores the exchange terms of one open offer
#[account(discriminator = 1)]
#[derive(InitSpace)]
pub struct Escrow {
    /// Caller-chosen seed, lets one maker run many escrows side by side
    pub seed: u64,
    /// The maker's wallet address (creator of the escrow)
    pub maker: Pubkey,
    /// Token A mint address (the token maker deposits)
    pub mint_a: Pubkey,
    /// Token B mint address (the token maker wants to receive)
    pub mint_b: Pubkey,
    /// Amount of Token B the maker wants to receive
    pub receive: u64,
    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl Escrow {
    /// Bytes allocated for the account, discriminator included
    pub const SPACE: usize = <Escrow as Discriminator>::DISCRIMINATOR.len() + Escrow::INIT_SPACE;
}

/// Validated arguments of a make instruction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Offer {
    pub deposit: u64,
    pub receive: u64,
}

impl Offer {
    /// Reject offers that could never settle into a real swap
    pub fn new(mint_a: &Pubkey, mint_b: &Pubkey, deposit: u64, receive: u64) -> Result<Self> {
        require_gt!(deposit, 0, EscrowError::InvalidOffer);
        require_gt!(receive, 0, EscrowError::InvalidOffer);
        require_keys_neq!(*mint_a, *mint_b, EscrowError::InvalidOffer);

        Ok(Self { deposit, receive })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_code(err: anchor_lang::error::Error) -> u32 {
        match err {
            anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
            anchor_lang::error::Error::ProgramError(e) => panic!("unexpected program error: {e:?}"),
        }
    }

    #[test]
    fn offer_accepts_distinct_mints_and_positive_amounts() {
        let (mint_a, mint_b) = (Pubkey::new_unique(), Pubkey::new_unique());

        let offer = Offer::new(&mint_a, &mint_b, 10_000_000, 50_000_000).unwrap();

        assert_eq!(offer.deposit, 10_000_000);
        assert_eq!(offer.receive, 50_000_000);
    }

    #[test]
    fn offer_rejects_zero_amounts() {
        let (mint_a, mint_b) = (Pubkey::new_unique(), Pubkey::new_unique());

        let err = Offer::new(&mint_a, &mint_b, 0, 50_000_000).unwrap_err();
        assert_eq!(error_code(err), u32::from(EscrowError::InvalidOffer));

        let err = Offer::new(&mint_a, &mint_b, 10_000_000, 0).unwrap_err();
        assert_eq!(error_code(err), u32::from(EscrowError::InvalidOffer));
    }

    #[test]
    fn offer_rejects_self_swap() {
        let mint = Pubkey::new_unique();

        let err = Offer::new(&mint, &mint, 10_000_000, 50_000_000).unwrap_err();
        assert_eq!(error_code(err), u32::from(EscrowError::InvalidOffer));
    }

    #[test]
    fn escrow_layout_is_discriminator_plus_fields() {
        assert_eq!(Escrow::DISCRIMINATOR, &[1]);
        assert_eq!(Escrow::INIT_SPACE, 8 + 32 + 32 + 32 + 8 + 1);
        assert_eq!(Escrow::SPACE, 114);

        let escrow = Escrow {
            seed: 7,
            maker: Pubkey::new_unique(),
            mint_a: Pubkey::new_unique(),
            mint_b: Pubkey::new_unique(),
            receive: 50_000_000,
            bump: 254,
        };
        let mut data = Vec::new();
        escrow.try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), Escrow::SPACE);

        let decoded = Escrow::try_deserialize(&mut data.as_slice()).unwrap();
        assert_eq!(decoded.seed, 7);
        assert_eq!(decoded.maker, escrow.maker);
        assert_eq!(decoded.receive, 50_000_000);
        assert_eq!(decoded.bump, 254);
    }
}
