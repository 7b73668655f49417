pub mod amm;
pub mod pool;

pub use amm::*;
pub use pool::*;

use anchor_lang::prelude::*;
use crate::errors::*;

// Typed read of a persisted record
// Empty data means the account was never created at that address
pub(crate) fn decode_account<T: AccountDeserialize>(data: &[u8]) -> Result<T> {
    require!(!data.is_empty(), AmmError::AccountNotFound);
    let mut bytes = data;
    T::try_deserialize(&mut bytes)
}
