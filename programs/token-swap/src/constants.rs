// Token Swap Program Constants

pub const AUTHORITY_SEED: &[u8] = b"authority";
pub const LIQUIDITY_SEED: &[u8] = b"liquidity";

pub const MAX_FEE_BASIS_POINTS: u16 = 10_000; // 100%
pub const FEE_DENOMINATOR: u128 = 10_000;

pub const LIQUIDITY_DECIMALS: u8 = 6;
pub const ANCHOR_DISCRIMINATOR: usize = 8;
