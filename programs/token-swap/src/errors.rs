use anchor_lang::prelude::*;

#[error_code]
pub enum AmmError {
    // Precondition violations
    #[msg("Fee basis points cannot exceed 10000 (100%)")]
    InvalidFee,

    #[msg("Token mints must be different - cannot create pool with same token")]
    InvalidPair,

    #[msg("Token mints must be passed in ascending byte order (mint_a < mint_b)")]
    UnorderedMints,

    #[msg("Amount cannot be zero")]
    ZeroAmount,

    #[msg("Token account balance is lower than the requested amount")]
    InsufficientBalance,

    // State violations
    #[msg("Pool has no liquidity")]
    EmptyPool,

    #[msg("Account not found")]
    AccountNotFound,

    #[msg("No valid bump found for the derived address")]
    DerivationExhausted,

    // Arithmetic violations
    #[msg("Arithmetic overflow occurred")]
    Overflow,

    #[msg("Division by zero attempted")]
    DivisionByZero,

    #[msg("Constant product invariant violated")]
    InvariantViolated,

    // Economic guards
    #[msg("Swap output is below minimum required (slippage protection)")]
    SlippageExceeded,

    #[msg("Deposit is too small to mint any liquidity tokens")]
    InsufficientLiquidityMinted,

    #[msg("Withdrawal is too small to redeem both tokens")]
    ZeroRedemption,

    #[msg("Swap input is too small to produce any output")]
    ZeroSwapOutput,
}
