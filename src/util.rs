use std::collections::HashSet;
use std::str::FromStr;

use cosmwasm_std::{Decimal, Uint128, Uint256};

use crate::error::{AmountError, ContractError};
use crate::models::{Config, WinningDraw};

/// Parse a purchase amount typed by the player. The amount arrives as text so
/// fractional input surfaces as an amount error instead of a decoding failure.
pub fn parse_amount(
  amount: &str,
  config: &Config,
) -> Result<Uint128, ContractError> {
  let price = config.price;
  let amount = Uint128::from_str(amount.trim())
    .map_err(|_| ContractError::InvalidAmount(AmountError::NotAnInteger))?;
  if amount < price || amount.is_zero() {
    return Err(ContractError::InvalidAmount(AmountError::UnderMinPrice));
  }
  if !(amount % price).is_zero() {
    return Err(ContractError::InvalidAmount(AmountError::NotMultipleOfPrice));
  }
  if count_affordable_tickets(amount, price)? > config.max_tickets {
    return Err(ContractError::InvalidAmount(AmountError::OverMaxTickets));
  }
  Ok(amount)
}

pub fn count_affordable_tickets(
  amount: Uint128,
  price: Uint128,
) -> Result<u32, ContractError> {
  if price.is_zero() {
    return Ok(0);
  }
  u32::try_from((amount / price).u128())
    .map_err(|_| ContractError::InvalidAmount(AmountError::OverMaxTickets))
}

/// Check that `numbers` holds exactly `config.number_count` in-range values
/// with no repeats.
pub fn require_valid_numbers(
  numbers: &[u16],
  config: &Config,
) -> Result<(), ContractError> {
  if numbers.len() != config.number_count as usize {
    return Err(ContractError::InvalidManualTicketSize);
  }
  require_distinct_in_range(numbers, config)
}

fn require_distinct_in_range(
  numbers: &[u16],
  config: &Config,
) -> Result<(), ContractError> {
  let mut visited: HashSet<u16> = HashSet::with_capacity(numbers.len());
  for n in numbers.iter() {
    if !config.contains(*n) {
      return Err(ContractError::OutOfRangeNumber);
    }
    if !visited.insert(*n) {
      return Err(ContractError::DuplicateNumbers);
    }
  }
  Ok(())
}

/// Build a WinningDraw from player input. The six numbers and the bonus are
/// validated together, so a bonus repeating a winning number is a duplicate.
pub fn record_winning_draw(
  numbers: &[u16],
  bonus: u16,
  config: &Config,
) -> Result<WinningDraw, ContractError> {
  if numbers.len() != config.number_count as usize {
    return Err(ContractError::InvalidManualTicketSize);
  }
  let mut all = numbers.to_vec();
  all.push(bonus);
  require_distinct_in_range(&all, config)?;

  Ok(WinningDraw {
    numbers: numbers.to_vec(),
    bonus,
  })
}

/// Total payout as a percentage of the purchase amount, rounded half up to
/// one decimal place.
pub fn profit_rate_percent(
  total_payout: Uint128,
  amount: Uint128,
) -> Result<Decimal, ContractError> {
  if amount.is_zero() {
    return Ok(Decimal::zero());
  }
  let doubled_tenths = total_payout.full_mul(2_000u128) / Uint256::from(amount);
  let tenths = (doubled_tenths + Uint256::one()) / Uint256::from(2u128);
  let tenths = Uint128::try_from(tenths).map_err(|_| ContractError::PayoutOverflow)?;
  Decimal::from_atomics(tenths, 1).map_err(|_| ContractError::PayoutOverflow)
}
