// Constant product pool math (x·y=k).
//
// Every function here is pure: reserves and liquidity supply are passed in
// by the caller (read live from the custody accounts and the liquidity
// mint), and the returned quote is what the instruction handler moves with
// token CPIs. All intermediate products are computed in u128 with checked
// arithmetic, and every rounding decision favors the pool.

use crate::{constants::FEE_DENOMINATOR, errors::AmmError};

pub type MathResult<T> = std::result::Result<T, AmmError>;

// Amounts a deposit consumes from the depositor and the liquidity it mints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositQuote {
    pub amount_a: u64,
    pub amount_b: u64,
    pub liquidity: u64,
}

// Amounts paid out of custody for a burned liquidity amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawQuote {
    pub amount_a: u64,
    pub amount_b: u64,
}

// Result of an exact-input swap, expressed in input/output terms so the
// same quote serves both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapQuote {
    // Input left after the fee is withheld.
    pub effective_input: u64,
    pub output: u64,
    pub new_reserve_in: u64,
    pub new_reserve_out: u64,
}

// Integer square root (Newton's method), rounded down.
pub fn integer_sqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = n / 2 + (n & 1);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

// Liquidity issuance for a deposit of up to `amount_a` / `amount_b`.
//
// Unseeded pool (`supply == 0`): both amounts are taken as-is and the
// geometric mean `floor(sqrt(a * b))` is minted, which sets the initial
// price to `amount_a / amount_b`.
//
// Seeded pool: `min(a * supply / reserve_a, b * supply / reserve_b)` is
// minted and each side is charged `ceil(minted * reserve / supply)`, so the
// deposit follows the current reserve ratio and the excess on the
// non-binding side is never pulled.
pub fn quote_deposit(
    amount_a: u64,
    amount_b: u64,
    reserve_a: u64,
    reserve_b: u64,
    supply: u64,
) -> MathResult<DepositQuote> {
    if amount_a == 0 || amount_b == 0 {
        return Err(AmmError::ZeroAmount);
    }

    if supply == 0 {
        let product = (amount_a as u128)
            .checked_mul(amount_b as u128)
            .ok_or(AmmError::Overflow)?;
        let liquidity = to_u64(integer_sqrt(product))?;
        if liquidity == 0 {
            return Err(AmmError::InsufficientLiquidityMinted);
        }
        return Ok(DepositQuote {
            amount_a,
            amount_b,
            liquidity,
        });
    }

    if reserve_a == 0 || reserve_b == 0 {
        return Err(AmmError::EmptyPool);
    }

    let supply_wide = supply as u128;
    let from_a = mul_div_floor(amount_a as u128, supply_wide, reserve_a as u128)?;
    let from_b = mul_div_floor(amount_b as u128, supply_wide, reserve_b as u128)?;
    let minted = from_a.min(from_b);
    if minted == 0 {
        return Err(AmmError::InsufficientLiquidityMinted);
    }

    let consumed_a = mul_div_ceil(minted, reserve_a as u128, supply_wide)?;
    let consumed_b = mul_div_ceil(minted, reserve_b as u128, supply_wide)?;

    let liquidity = to_u64(minted)?;
    supply.checked_add(liquidity).ok_or(AmmError::Overflow)?;

    Ok(DepositQuote {
        amount_a: to_u64(consumed_a)?,
        amount_b: to_u64(consumed_b)?,
        liquidity,
    })
}

// Redemption for burning `amount` liquidity tokens out of `supply`.
pub fn quote_withdraw(
    amount: u64,
    reserve_a: u64,
    reserve_b: u64,
    supply: u64,
) -> MathResult<WithdrawQuote> {
    if amount == 0 {
        return Err(AmmError::ZeroAmount);
    }
    if supply == 0 {
        return Err(AmmError::EmptyPool);
    }
    if amount > supply {
        return Err(AmmError::InsufficientBalance);
    }

    let amount_a = mul_div_floor(reserve_a as u128, amount as u128, supply as u128)?;
    let amount_b = mul_div_floor(reserve_b as u128, amount as u128, supply as u128)?;
    if amount_a == 0 || amount_b == 0 {
        return Err(AmmError::ZeroRedemption);
    }

    Ok(WithdrawQuote {
        amount_a: to_u64(amount_a)?,
        amount_b: to_u64(amount_b)?,
    })
}

// Exact-input swap against `reserve_in` / `reserve_out`.
//
// `output` is the largest integer with
// `(reserve_in + effective_input) * (reserve_out - output) >= reserve_in * reserve_out`.
// The full `input` (fee included) is added to the input reserve, so the
// withheld fee stays in the pool for liquidity providers.
pub fn quote_swap(
    input: u64,
    reserve_in: u64,
    reserve_out: u64,
    fee_basis_points: u16,
    min_output: u64,
) -> MathResult<SwapQuote> {
    if input == 0 {
        return Err(AmmError::ZeroAmount);
    }
    if reserve_in == 0 || reserve_out == 0 {
        return Err(AmmError::EmptyPool);
    }
    let fee = fee_basis_points as u128;
    if fee > FEE_DENOMINATOR {
        return Err(AmmError::InvalidFee);
    }

    let effective_input = mul_div_floor(input as u128, FEE_DENOMINATOR - fee, FEE_DENOMINATOR)?;

    let rebalanced_in = (reserve_in as u128)
        .checked_add(effective_input)
        .ok_or(AmmError::Overflow)?;
    let rebalanced_out = mul_div_ceil(reserve_in as u128, reserve_out as u128, rebalanced_in)?;
    let output = (reserve_out as u128)
        .checked_sub(rebalanced_out)
        .ok_or(AmmError::Overflow)?;
    let output = to_u64(output)?;

    if output < min_output {
        return Err(AmmError::SlippageExceeded);
    }
    if output == 0 {
        return Err(AmmError::ZeroSwapOutput);
    }

    let new_reserve_in = reserve_in.checked_add(input).ok_or(AmmError::Overflow)?;
    let new_reserve_out = reserve_out.checked_sub(output).ok_or(AmmError::Overflow)?;
    check_invariant(reserve_in, reserve_out, new_reserve_in, new_reserve_out)?;

    Ok(SwapQuote {
        effective_input: to_u64(effective_input)?,
        output,
        new_reserve_in,
        new_reserve_out,
    })
}

// Fails unless `after_a * after_b >= before_a * before_b`.
pub fn check_invariant(before_a: u64, before_b: u64, after_a: u64, after_b: u64) -> MathResult<()> {
    let before = (before_a as u128)
        .checked_mul(before_b as u128)
        .ok_or(AmmError::Overflow)?;
    let after = (after_a as u128)
        .checked_mul(after_b as u128)
        .ok_or(AmmError::Overflow)?;
    if after < before {
        return Err(AmmError::InvariantViolated);
    }
    Ok(())
}

fn mul_div_floor(a: u128, b: u128, denominator: u128) -> MathResult<u128> {
    if denominator == 0 {
        return Err(AmmError::DivisionByZero);
    }
    let product = a.checked_mul(b).ok_or(AmmError::Overflow)?;
    Ok(product / denominator)
}

fn mul_div_ceil(a: u128, b: u128, denominator: u128) -> MathResult<u128> {
    if denominator == 0 {
        return Err(AmmError::DivisionByZero);
    }
    let product = a.checked_mul(b).ok_or(AmmError::Overflow)?;
    let quotient = product / denominator;
    if product % denominator == 0 {
        Ok(quotient)
    } else {
        quotient.checked_add(1).ok_or(AmmError::Overflow)
    }
}

fn to_u64(value: u128) -> MathResult<u64> {
    u64::try_from(value).map_err(|_| AmmError::Overflow)
}
