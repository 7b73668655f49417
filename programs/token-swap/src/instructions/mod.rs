// Instructions module
// - create_amm
// - create_pool
// - deposit_liquidity
// - swap_exact_tokens_for_tokens
// - withdraw_liquidity

pub mod create_amm;
pub mod create_pool;
pub mod deposit_liquidity;
pub mod swap_exact_tokens_for_tokens;
pub mod withdraw_liquidity;

pub use create_amm::*;
pub use create_pool::*;
pub use deposit_liquidity::*;
pub use swap_exact_tokens_for_tokens::*;
pub use withdraw_liquidity::*;
