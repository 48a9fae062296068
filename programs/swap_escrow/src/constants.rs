/// Namespace tag for escrow record PDAs
pub const ESCROW_SEED: &[u8] = b"escrow";
