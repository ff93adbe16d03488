use std::collections::HashSet;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Decimal, Uint128};

use crate::error::ContractError;

#[cw_serde]
pub struct Config {
  pub price: Uint128,
  pub min_number: u16,
  pub max_number: u16,
  pub number_count: u8,
  pub max_tickets: u32,
  pub payouts: Vec<Payout>,
}

/// Fewest matching numbers that can win any prize.
pub const MIN_WINNING_MATCHES: u8 = 3;

#[cw_serde]
pub struct Payout {
  pub tier: Tier,
  pub amount: Uint128,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      price: Uint128::from(1_000u128),
      min_number: 1,
      max_number: 45,
      number_count: 6,
      max_tickets: 100,
      payouts: vec![
        Payout::new(Tier::First, 2_000_000_000),
        Payout::new(Tier::Second, 30_000_000),
        Payout::new(Tier::Third, 1_500_000),
        Payout::new(Tier::Fourth, 50_000),
        Payout::new(Tier::Fifth, 5_000),
      ],
    }
  }
}

impl Payout {
  pub fn new(
    tier: Tier,
    amount: u128,
  ) -> Self {
    Self {
      tier,
      amount: Uint128::from(amount),
    }
  }
}

impl Config {
  pub fn validate(&self) -> Result<(), ContractError> {
    if self.price.is_zero() || self.min_number == 0 || self.max_tickets == 0 {
      return Err(ContractError::ValidationError);
    }
    // Fewer numbers than the smallest prize needs would make First unreachable.
    if self.number_count < MIN_WINNING_MATCHES {
      return Err(ContractError::ValidationError);
    }
    if self.min_number > self.max_number {
      return Err(ContractError::ValidationError);
    }
    // A winning draw needs room for every number plus the bonus.
    let span = (self.max_number - self.min_number) as u32 + 1;
    if span < self.number_count as u32 + 1 {
      return Err(ContractError::ValidationError);
    }
    let mut tiers: HashSet<Tier> = HashSet::with_capacity(self.payouts.len());
    for payout in self.payouts.iter() {
      if payout.tier == Tier::Miss || !tiers.insert(payout.tier) {
        return Err(ContractError::ValidationError);
      }
    }
    Ok(())
  }

  pub fn contains(
    &self,
    n: u16,
  ) -> bool {
    n >= self.min_number && n <= self.max_number
  }

  /// Payout for a single ticket in the given tier. Tiers without a configured
  /// payout pay nothing.
  pub fn payout(
    &self,
    tier: Tier,
  ) -> Uint128 {
    self
      .payouts
      .iter()
      .find(|p| p.tier == tier)
      .map(|p| p.amount)
      .unwrap_or_default()
  }
}

/// Prize tiers, best first.
#[cw_serde]
#[derive(Copy, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
  First,
  Second,
  Third,
  Fourth,
  Fifth,
  Miss,
}

impl Tier {
  pub const ALL: [Tier; 6] = [
    Tier::First,
    Tier::Second,
    Tier::Third,
    Tier::Fourth,
    Tier::Fifth,
    Tier::Miss,
  ];

  pub fn is_winning(&self) -> bool {
    *self != Tier::Miss
  }
}

#[cw_serde]
pub struct WinningDraw {
  pub numbers: Vec<u16>,
  pub bonus: u16,
}

#[cw_serde]
pub struct TierCount {
  pub tier: Tier,
  pub count: u32,
}

#[cw_serde]
pub struct ScoreReport {
  pub histogram: Vec<TierCount>,
  pub total_payout: Uint128,
  pub profit_rate_percent: Decimal,
}

impl ScoreReport {
  pub fn count(
    &self,
    tier: Tier,
  ) -> u32 {
    self
      .histogram
      .iter()
      .find(|c| c.tier == tier)
      .map(|c| c.count)
      .unwrap_or(0)
  }
}

#[cw_serde]
pub struct TicketScore {
  pub matches: u8,
  pub bonus_matched: bool,
  pub tier: Tier,
}

#[cw_serde]
#[derive(Copy, Eq)]
pub enum SessionStatus {
  Empty,
  AmountEntered,
  TicketsIssued,
  WinningNumbersEntered,
  ResultsComputed,
}
