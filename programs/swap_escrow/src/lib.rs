use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod pda;
pub mod state;
pub mod vault;

use instructions::*;

declare_id!("22222222222222222222222222222222222222222222");

#[program]
pub mod swap_escrow {
    use super::*;

    /// Open an escrow: maker deposits Token A and names a price in Token B
    #[instruction(discriminator = 0)]
    pub fn make(ctx: Context<Make>, seed: u64, deposit: u64, receive: u64) -> Result<()> {
        instructions::make::handler(ctx, seed, deposit, receive)
    }

    /// Settle the escrow: taker pays Token B, receives the deposit
    #[instruction(discriminator = 1)]
    pub fn take(ctx: Context<Take>) -> Result<()> {
        instructions::take::handler(ctx)
    }

    /// Cancel the escrow: maker reclaims the deposit
    #[instruction(discriminator = 2)]
    pub fn refund(ctx: Context<Refund>) -> Result<()> {
        instructions::refund::handler(ctx)
    }
}
